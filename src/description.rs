//! Assembly of the long-form description from the source documents

use std::path::Path;

use crate::comments::strip_html_comments;
use crate::config::ReleaseConfig;
use crate::convert::{self, Convert};
use crate::error::Result;
use crate::temp::make_temp_path;
use crate::text;

/// Section header prepended to the license document
const LICENSE_HEADER: &str = "License\n=======\n\n";

/// Banner marking the description file as generated.
///
/// Comments in the publication format begin with two dots.
pub const GENERATED_BANNER: &str = "\
.. Do not edit this file.  It is auto-generated by 'relprep prep', so edits
.. should go in the readme, history, and license documents rather than here.
";

/// Assembles the publication-format description from the configured source
/// documents.
///
/// The assembler only produces candidate text in memory plus transient temp
/// files; writing the canonical description file is the caller's decision.
pub struct DescriptionAssembler<'a> {
    config: &'a ReleaseConfig,
    converter: &'a dyn Convert,
}

impl<'a> DescriptionAssembler<'a> {
    pub fn new(config: &'a ReleaseConfig, converter: &'a dyn Convert) -> Self {
        Self { config, converter }
    }

    /// Produce the banner-prefixed publication-format description.
    ///
    /// Section order is fixed and significant: readme, history, license.
    pub fn assemble(&self) -> Result<String> {
        let readme = strip_html_comments(&text::read_text(&self.config.readme)?);
        let history = strip_html_comments(&text::read_text(&self.config.history)?);
        // The license text is assumed free of comment markers and is not
        // stripped.
        let license = format!(
            "{LICENSE_HEADER}{}",
            text::read_text(&self.config.license)?
        );

        let combined = [readme, history, license].join("\n\n");

        // The combined authoring document keeps the readme's extension so
        // the converter recognizes its format.
        let authoring_ext = extension_of(&self.config.readme);
        let combined_path = make_temp_path(&self.config.description, authoring_ext.as_deref());
        text::write_text(&combined, &combined_path)?;

        let converted_path = make_temp_path(&self.config.description, None);
        let converted = convert::convert_file(self.converter, &combined_path, &converted_path)?;

        Ok(format!("{GENERATED_BANNER}\n{converted}"))
    }
}

/// File extension including the leading dot, if any
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
