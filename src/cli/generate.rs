use super::EditorState;
use crate::Result;
use colored::Colorize;

/// Render the change log, print it, and overwrite the configured log file.
pub fn run(state: &EditorState) -> Result<()> {
    let document = state.session.render_log();

    println!("{}", document);
    std::fs::write(&state.config.log_file, &document)?;

    println!(
        "{}",
        format!(
            "Wrote {} entries to {} at {}",
            state.session.log().len(),
            state.config.log_file.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .green()
    );
    Ok(())
}
