//! Publish command execution.
//!
//! Resolves the request from arguments and pyproject.toml, then hands it to
//! the release sequencer with the real runner and stdin confirmation.

use crate::cli::{Args, OutputManager};
use crate::error::Result;
use crate::metadata::load_metadata;
use crate::process::SystemRunner;
use crate::release::{ReleaseOutcome, ReleaseRequest, Sequencer, StdinConfirm};

/// Build the release request for `args`, reading pyproject.toml as needed
pub(super) fn build_request(args: &Args) -> Result<(ReleaseRequest, crate::PublishSettings)> {
    let metadata = load_metadata(&args.package_root)?;
    let version = match &args.release_version {
        Some(version) => version.clone(),
        None => metadata.require_version()?.to_string(),
    };

    let request = ReleaseRequest::new(&args.package_root, version)?
        .with_log_path(&args.log_file)
        .with_regenerate_docs(args.regenerate_docs)
        .with_extra_publish_args(args.publish_args.clone());
    Ok((request, metadata.settings))
}

/// Execute the publish command, returning the outcome of the release
pub(super) fn execute_publish(args: &Args, output: &OutputManager) -> Result<ReleaseOutcome> {
    let (request, settings) = build_request(args)?;
    log::debug!("Release request: {:?}", request);
    log::debug!("Publish settings: {:?}", settings);

    output.info(&format!(
        "Releasing v{} from {}",
        request.version(),
        request.package_root().display()
    ));

    let runner = SystemRunner::new(request.package_root(), output.clone());
    let confirm = StdinConfirm;
    Sequencer::new(&runner, &confirm, &settings, output).run(&request)
}
