//! Publish command: synchronization-gated, confirmation-gated upload

use std::path::PathBuf;

use console::Style;

use crate::config::ReleaseConfig;
use crate::confirm::{Confirm, TerminalConfirm};
use crate::convert::{CommandConverter, Convert};
use crate::description::DescriptionAssembler;
use crate::error::{RelprepError, Result};
use crate::exec::{CommandUpload, Upload};
use crate::text;

/// Question asked at the confirmation gate
const CONFIRM_PROMPT: &str = "Are you sure you want to publish (yes/no)?";

/// What a publish run did
#[derive(Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Both gates passed and the upload ran
    Published,

    /// The committed description differs from a fresh assembly; nothing was
    /// uploaded
    OutOfDate,
}

/// Publish workflow over injected converter, confirmation, and upload
/// capabilities
pub struct PublishOperation<'a> {
    config: &'a ReleaseConfig,
    converter: &'a dyn Convert,
    confirm: &'a dyn Confirm,
    uploader: &'a dyn Upload,
}

impl<'a> PublishOperation<'a> {
    pub fn new(
        config: &'a ReleaseConfig,
        converter: &'a dyn Convert,
        confirm: &'a dyn Confirm,
        uploader: &'a dyn Upload,
    ) -> Self {
        Self {
            config,
            converter,
            confirm,
            uploader,
        }
    }

    /// Run the synchronization and confirmation gates and, only if both
    /// pass, the upload.
    pub fn execute(&self) -> Result<PublishOutcome> {
        let fresh = DescriptionAssembler::new(self.config, self.converter).assemble()?;

        let description_path = &self.config.description;
        if !description_path.exists() {
            return Err(RelprepError::DescriptionMissing {
                path: description_path.display().to_string(),
            });
        }
        let committed = text::read_text(description_path)?;

        if fresh != committed {
            println!(
                "{} {}",
                Style::new()
                    .yellow()
                    .bold()
                    .apply_to("Description file not up-to-date:"),
                description_path.display()
            );
            println!("Run the following command and commit the changes--\n");
            println!("    relprep prep\n");
            return Ok(PublishOutcome::OutOfDate);
        }

        println!("Description up-to-date: {}", description_path.display());

        if !self.confirm.confirm(CONFIRM_PROMPT)? {
            return Err(RelprepError::PublishDeclined);
        }

        self.uploader.upload()?;
        Ok(PublishOutcome::Published)
    }
}

/// Run publish command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = super::workspace_root(workspace)?;
    let config = ReleaseConfig::load(&root)?;
    let converter = CommandConverter::new(config.converter.clone(), &root);
    let uploader = CommandUpload::new(config.publish_command.clone(), &root);

    let operation = PublishOperation::new(&config, &converter, &TerminalConfirm, &uploader);

    if operation.execute()? == PublishOutcome::Published {
        println!("{}", Style::new().green().bold().apply_to("Published."));
    }

    Ok(())
}
