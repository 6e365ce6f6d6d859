//! Metadata stub for assets that cannot be rendered as markdown

use biased_fs::io::format_timestamp;

use crate::document::SourceDocument;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Describe a binary asset: name, path, size, media type and mtime.
pub fn metadata_stub(source: &SourceDocument) -> String {
    let name = source.file_name();
    let media_type = mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(FALLBACK_MEDIA_TYPE);

    format!(
        "# Asset: {name}

> [!NOTE]
> This is a binary asset and cannot be fully converted to Markdown.

- **File Name**: {name}
- **Path**: {path}
- **Size**: {size:.2} KB
- **Type**: {media_type}
- **Last Modified**: {modified}

Please refer to the original file for content.
",
        path = source.relative,
        size = source.size as f64 / 1024.0,
        modified = format_timestamp(source.modified),
    )
}
