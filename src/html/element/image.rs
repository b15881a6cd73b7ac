use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::text::{write_closing, write_opening};
use crate::common::css::CssDeclarations;
use crate::document::Image;
use crate::html::context::RenderContext;
use crate::html::style::inline_style_attribute;

/// Writes an image inline as a base64 data URI.
///
/// Images without data or MIME type render as nothing.
pub(super) struct ImageWriter<'a> {
    image: &'a Image,
    without_p: bool,
}

impl<'a> ImageWriter<'a> {
    pub(super) fn new(image: &'a Image, without_p: bool) -> Self {
        Self { image, without_p }
    }

    pub(super) fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        if self.image.data.is_empty() || self.image.mime_type.is_empty() {
            tracing::debug!(source = %self.image.source, "image without data, skipped");
            return String::new();
        }

        let mut css = CssDeclarations::new();
        if let Some(width) = self.image.width {
            css.set("width", format!("{}px", width));
        }
        if let Some(height) = self.image.height {
            css.set("height", format!("{}px", height));
        }

        let mut content = write_opening(ctx, None, self.without_p);
        content.push_str("<img border=\"0\"");
        content.push_str(&inline_style_attribute(ctx, &css));
        content.push_str(" src=\"data:");
        content.push_str(&ctx.escape(&self.image.mime_type));
        content.push_str(";base64,");
        STANDARD.encode_string(&self.image.data, &mut content);
        content.push_str("\" />");
        content.push_str(write_closing(self.without_p));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use crate::document::Document;
    use crate::html::HtmlOptions;

    #[test]
    fn test_image_data_uri() {
        let image = Image {
            source: "dot.png".to_string(),
            mime_type: "image/png".to_string(),
            data: b"PNG".to_vec(),
            width: Some(16),
            height: Some(8),
        };
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(
            ImageWriter::new(&image, true).write(&mut ctx),
            "<img border=\"0\" style=\"width: 16px; height: 8px;\" src=\"data:image/png;base64,UE5H\" />"
        );
    }

    #[test]
    fn test_image_without_data() {
        let image = Image {
            mime_type: "image/png".to_string(),
            ..Image::default()
        };
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(ImageWriter::new(&image, false).write(&mut ctx), "");
    }
}
