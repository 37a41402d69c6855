//! Command execution and exit-code policy.
//!
//! Gate aborts and errors both end up here and are turned into the process
//! exit code; nothing below this module calls `process::exit`.

mod publish;

use crate::cli::{Args, OutputManager};
use crate::release::{AbortReason, ReleaseOutcome};
use publish::execute_publish;

/// Execute the release for parsed arguments and return the process exit code
pub fn execute_command(args: Args) -> i32 {
    let output = OutputManager::new(args.quiet);

    if let Err(validation_error) = args.validate() {
        output.error(&validation_error.to_string());
        return 1;
    }

    match execute_publish(&args, &output) {
        Ok(ReleaseOutcome::Completed(report)) => {
            log::info!("Completed release: {:?}", report);
            0
        }
        Ok(ReleaseOutcome::Aborted(abort)) => {
            output.error(&format!("Release aborted at '{}': {}", abort.step, abort.reason));
            if matches!(abort.reason, AbortReason::Declined { .. }) {
                println!("Bye.");
            }
            abort.exit_code()
        }
        Err(e) => {
            output.error(&format!("Release failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.println(&format!("  • {}", suggestion));
                }
            }

            1
        }
    }
}
