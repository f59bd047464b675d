//! Interactive session: filters → load → reports → raw data → restart?

use crate::config::Config;
use crate::core::loader::load_data;
use crate::core::pager::raw_data;
use crate::core::reports::{self, Layout};
use crate::errors::{AppError, AppResult};
use crate::ui::filters::get_filters;
use crate::ui::messages;
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Run sessions until the user declines to restart.
/// Returns the number of completed iterations.
pub fn run<R: BufRead, W: Write>(cfg: &Config, input: R, out: W) -> AppResult<usize> {
    let mut prompter = Prompter::new(input, out);
    let layout = Layout::from_config(cfg);
    let data_dir = cfg.data_path();
    let mut iterations = 0;

    loop {
        log::debug!("session state: prompting");
        let filter = get_filters(&mut prompter, &layout.separator)?;

        match load_data(&data_dir, &filter) {
            Ok(table) => {
                log::debug!("session state: reporting ({} trips)", table.len());
                reports::run_all(prompter.out(), &layout, &table, &filter)?;

                log::debug!("session state: paging");
                raw_data(&mut prompter, &table, cfg.page_size, &layout.separator)?;
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", filter.city.label());
                messages::error(&e);
            }
        }
        iterations += 1;

        let restart = match prompter.read_answer(RESTART_PROMPT) {
            Ok(answer) => answer == "yes",
            Err(AppError::InputClosed) => false,
            Err(e) => return Err(e),
        };
        if !restart {
            log::debug!("session state: terminated after {iterations} iteration(s)");
            return Ok(iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    const WASHINGTON: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,2017-01-01 01:01:01,3661,Lincoln Memorial,Jefferson Memorial,Subscriber
2017-02-06 07:15:00,2017-02-06 07:21:40,400,Union Station,Lincoln Memorial,Customer
";

    fn session(dir: &std::path::Path, input: &str) -> (AppResult<usize>, String) {
        let cfg = Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        };
        let mut out = Vec::new();
        let result = run(&cfg, Cursor::new(input.as_bytes().to_vec()), &mut out);
        (result, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn one_iteration_then_quit() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("washington.csv"), WASHINGTON).expect("fixture");

        let (result, out) = session(dir.path(), "washington\nyes\njanuary\nno\nno\nno\n");
        assert_eq!(result.expect("session"), 1);
        assert!(out.contains("Total Travel Time: 1 Hours 1 Minutes 1 Seconds"));
        assert!(!out.contains("Most Popular Month"));
        assert!(out.contains("Most Popular Day For Traveling: Sunday"));
        assert!(out.contains("No Gender Data Provided For Washington."));
    }

    #[test]
    fn restart_runs_again() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("washington.csv"), WASHINGTON).expect("fixture");

        let script = "washington\nno\nno\nno\nYes\nwashington\nno\nno\nno\nnope\n";
        let (result, out) = session(dir.path(), script);
        assert_eq!(result.expect("session"), 2);
        assert_eq!(out.matches("Calculating Trip Duration...").count(), 2);
    }

    #[test]
    fn load_failure_goes_to_restart_prompt() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (result, out) = session(dir.path(), "chicago\nno\nno\nno\n");
        assert_eq!(result.expect("session"), 1);
        assert!(!out.contains("Calculating"));
        assert!(out.contains("Would you like to restart?"));
    }

    #[test]
    fn closed_input_mid_question_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (result, _) = session(dir.path(), "chicago\n");
        assert!(matches!(result, Err(AppError::InputClosed)));
    }

    #[test]
    fn closed_input_at_restart_ends_quietly() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("washington.csv"), WASHINGTON).expect("fixture");
        let (result, _) = session(dir.path(), "washington\nno\nno\nno\n");
        assert_eq!(result.expect("session"), 1);
    }
}
