//! HTML templates for the gallery.
//!
//! Embedded HTML for the index page. The page renderer is the only
//! consumer of [`ImageDescriptor`]s; the assembler itself never produces
//! markup.

use crate::gallery::ImageDescriptor;

/// Escape a string for use in HTML attribute and text positions
fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one gallery entry.
///
/// Links request the image at half its computed display box; the full box
/// would dominate the page on small screens and the halving keeps the
/// transform request cheap. The browser's native lazy loading defers each
/// thumbnail until it scrolls into view.
fn render_image(image: &ImageDescriptor) -> String {
    let src = html_escape(&image.href);
    let w = image.width / 2;
    let h = image.height / 2;
    let r = image.rotation.degrees();

    format!(
        r#"        <a class="image" href="{src}" style="width: {w}px; height: {h}px">
            <img src="{src}?w={w}&amp;h={h}&amp;r={r}" width="{w}" height="{h}" loading="lazy" />
        </a>
"#
    )
}

/// Render the gallery index page
pub fn render_index(root_label: &str, images: &[ImageDescriptor]) -> String {
    let root = html_escape(root_label);
    let entries: String = images.iter().map(render_image).collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pictures in {root}...</title>
    <style>
        body {{
            margin: 0;
            background-color: #b5b4b0;
        }}
        .image {{
            display: inline-block;
            margin: 2em auto;
            background-color: #2570d9;
            box-shadow: 0 0 10px rgba(0,0,0,0.3);
        }}
        img {{
            display: block;
        }}
    </style>
</head>
<body>
    <p>Images in {root} ...</p>
{entries}</body>
</html>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_proc::Rotation;

    #[test]
    fn links_carry_halved_dimensions_and_rotation() {
        let images = vec![ImageDescriptor {
            href: "holiday/beach.jpeg".to_string(),
            width: 300,
            height: 200,
            rotation: Rotation::Rotate90,
        }];

        let html = render_index("./jpg", &images);
        assert!(html.contains(r#"href="holiday/beach.jpeg""#));
        assert!(html.contains("holiday/beach.jpeg?w=150&amp;h=100&amp;r=90"));
        assert!(html.contains(r#"width="150" height="100""#));
    }

    #[test]
    fn odd_dimensions_halve_by_integer_division() {
        let images = vec![ImageDescriptor {
            href: "odd.jpeg".to_string(),
            width: 225,
            height: 301,
            rotation: Rotation::None,
        }];

        let html = render_index("./jpg", &images);
        assert!(html.contains("odd.jpeg?w=112&amp;h=150&amp;r=0"));
    }

    #[test]
    fn markup_significant_characters_are_escaped() {
        let images = vec![ImageDescriptor {
            href: "a&b<c>.jpeg".to_string(),
            width: 10,
            height: 10,
            rotation: Rotation::None,
        }];

        let html = render_index("<root>", &images);
        assert!(html.contains("a&amp;b&lt;c&gt;.jpeg"));
        assert!(html.contains("Pictures in &lt;root&gt;..."));
        assert!(!html.contains("<root>"));
    }

    #[test]
    fn empty_gallery_still_renders_a_page() {
        let html = render_index("./jpg", &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Images in ./jpg ..."));
    }
}
