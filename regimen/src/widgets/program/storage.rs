use std::path::Path;

use super::errors::ProgramError;
use super::model::Program;

/// Load a program from a JSON file.
pub fn load_program(path: &Path) -> Result<Program, ProgramError> {
    let content = std::fs::read_to_string(path)?;
    let program: Program = serde_json::from_str(&content)?;
    Ok(program)
}

/// Save a program to a JSON file atomically.
pub fn save_program(path: &Path, program: &Program) -> Result<(), ProgramError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(program)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Load a program, writing the sample program first when the file is missing.
pub fn load_or_init_program(path: &Path) -> Result<Program, ProgramError> {
    match load_program(path) {
        Err(ProgramError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no program at {}, writing sample", path.display());
            let program = Program::sample();
            save_program(path, &program)?;
            Ok(program)
        },
        result => result,
    }
}
