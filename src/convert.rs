//! External document-converter capability and its adapter

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use console::Style;

use crate::error::{RelprepError, Result};
use crate::text;

/// Document-conversion capability.
///
/// Implementations turn the authoring-format file at `input` into a
/// publication-format file at `output`. Whether output was actually produced
/// is judged by the adapter, not the capability, so a fake can simulate both
/// success and the no-output failure path.
pub trait Convert {
    fn convert(&self, input: &Path, output: &Path) -> Result<()>;

    /// Human-readable command line for diagnostics
    fn describe(&self, input: &Path, output: &Path) -> String;
}

/// Converter that shells out to a configured argv (pandoc by default)
pub struct CommandConverter {
    argv: Vec<String>,
    workdir: PathBuf,
}

impl CommandConverter {
    pub fn new(argv: Vec<String>, workdir: &Path) -> Self {
        Self {
            argv,
            workdir: workdir.to_path_buf(),
        }
    }

    /// Substitute the `{input}`/`{output}` placeholders into the argv
    fn argv_for(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        self.argv
            .iter()
            .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
            .collect()
    }
}

impl Convert for CommandConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let argv = self.argv_for(input, output);
        let (program, args) = argv
            .split_first()
            .ok_or(RelprepError::ConverterNotConfigured)?;

        println!(
            "converting: {} to {}\n  {}",
            input.display(),
            output.display(),
            Style::new().dim().apply_to(argv.join(" "))
        );

        // The converter is a black box: success is judged by the output file
        // existing afterwards, not by the exit status.
        let _ = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .status();

        Ok(())
    }

    fn describe(&self, input: &Path, output: &Path) -> String {
        self.argv_for(input, output).join(" ")
    }
}

/// Run `converter` from `source` to `dest_temp` and return the converted
/// text.
///
/// Any stale file at `dest_temp` is removed first, so output left by an
/// earlier run can never masquerade as fresh. A converter that produces no
/// output file is a terminal failure naming the failed command; no text is
/// returned on that path.
pub fn convert_file(converter: &dyn Convert, source: &Path, dest_temp: &Path) -> Result<String> {
    if dest_temp.exists() {
        fs::remove_file(dest_temp).map_err(|e| RelprepError::FileWriteFailed {
            path: dest_temp.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    converter.convert(source, dest_temp)?;

    if !dest_temp.exists() {
        return Err(RelprepError::ConversionFailed {
            command: converter.describe(source, dest_temp),
        });
    }

    text::read_text(dest_temp)
}
