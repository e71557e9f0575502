use pretty_assertions::assert_eq;
use tagcloud_core::{FontBounds, RankedEntry};
use tagcloud_engine::{CloudDocument, HtmlRenderer, Renderer};

fn entry(word: &str, count: u64, font_size: u32) -> RankedEntry {
    RankedEntry {
        word: word.to_string(),
        count,
        font_size,
    }
}

#[test]
fn renders_one_span_per_entry_in_order() {
    let entries = vec![entry("cat", 2, 29), entry("sat", 1, 11), entry("the", 3, 48)];
    let doc = CloudDocument {
        source_name: "data/pets.txt",
        requested: 3,
        entries: &entries,
        font: FontBounds::default(),
    };
    let html = HtmlRenderer.render(&doc);

    assert!(html.starts_with("<html>\n<head>\n<title>Top 3 words in data/pets.txt</title>\n"));
    assert!(html.contains("<h2>Top 3 words in data/pets.txt</h2>"));
    assert!(html.contains("<div class=\"cdiv\">\n<p class=\"cbox\">\n"));
    assert!(html.ends_with("</p>\n</div>\n</body>\n</html>\n"));

    let spans: Vec<&str> = html.lines().filter(|l| l.starts_with("<span")).collect();
    assert_eq!(
        spans,
        vec![
            "<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>",
            "<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">sat</span>",
            "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>",
        ]
    );
}

#[test]
fn empty_cloud_still_renders_a_complete_page() {
    let doc = CloudDocument {
        source_name: "empty.txt",
        requested: 0,
        entries: &[],
        font: FontBounds::default(),
    };
    let html = HtmlRenderer.render(&doc);

    assert!(html.contains("<title>Top 0 words in empty.txt</title>"));
    assert!(!html.contains("<span"));
    assert!(html.contains("<p class=\"cbox\">\n</p>"));
}

#[test]
fn style_covers_configured_font_range() {
    let doc = CloudDocument {
        source_name: "x",
        requested: 1,
        entries: &[],
        font: FontBounds::default(),
    };
    let html = HtmlRenderer.render(&doc);
    assert!(html.contains(".f11 { font-size: 11px; }"));
    assert!(html.contains(".f48 { font-size: 48px; }"));
    assert!(!html.contains(".f49"));
}

#[test]
fn words_and_source_name_are_escaped() {
    let entries = vec![entry("a<b", 1, 29)];
    let doc = CloudDocument {
        source_name: "R&D.txt",
        requested: 1,
        entries: &entries,
        font: FontBounds::default(),
    };
    let html = HtmlRenderer.render(&doc);
    assert!(html.contains("<title>Top 1 words in R&amp;D.txt</title>"));
    assert!(html.contains(">a&lt;b</span>"));
}
