use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::Entry;
use crate::errors::FinFeedResult;

const CHANNEL_TITLE: &str = "Combined Finance RSS";
const CHANNEL_LINK: &str = "https://example.com";
const CHANNEL_DESCRIPTION: &str = "Combined finance news from configured sources";

/// Write the entries as an RSS 2.0 document, overwriting `path`.
/// Entries are emitted in the order given; the caller sorts.
pub fn write_feed(entries: &[Entry], path: impl AsRef<Path>) -> FinFeedResult<()> {
    let document = render_feed(entries, Utc::now())?;
    fs::write(path, document)?;
    Ok(())
}

fn render_feed(entries: &[Entry], build_date: DateTime<Utc>) -> FinFeedResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss_start = BytesStart::new("rss");
    rss_start.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss_start))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", CHANNEL_TITLE)?;
    write_text_element(&mut writer, "link", CHANNEL_LINK)?;
    write_text_element(&mut writer, "description", CHANNEL_DESCRIPTION)?;
    write_text_element(&mut writer, "lastBuildDate", &build_date.to_rfc2822())?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        write_text_element(&mut writer, "title", &entry.title)?;
        write_text_element(&mut writer, "link", &entry.link)?;
        write_text_element(&mut writer, "description", &entry.summary)?;
        write_text_element(&mut writer, "pubDate", &entry.pub_date.to_rfc2822())?;
        // guid reuses the link; entries sharing a link collide here too
        write_text_element(&mut writer, "guid", &entry.link)?;
        write_text_element(&mut writer, "source", &entry.source)?;
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(writer.into_inner())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> FinFeedResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(title: &str) -> Entry {
        Entry::new(
            title.to_string(),
            "https://example.com/a".to_string(),
            "summary text".to_string(),
            "Markets Wire".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    fn build_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_result_set_renders_itemless_channel() {
        let doc = render_feed(&[], build_date()).unwrap();
        let text = String::from_utf8(doc).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(text.contains("<channel>"));
        assert!(text.contains("<lastBuildDate>Tue, 16 Jan 2024 08:00:00 +0000</lastBuildDate>"));
        assert!(!text.contains("<item>"));
    }

    #[test]
    fn test_item_fields_rendered() {
        let doc = render_feed(&[entry("Rates hold")], build_date()).unwrap();
        let text = String::from_utf8(doc).unwrap();

        assert!(text.contains("<title>Rates hold</title>"));
        assert!(text.contains("<link>https://example.com/a</link>"));
        assert!(text.contains("<description>summary text</description>"));
        assert!(text.contains("<pubDate>Mon, 15 Jan 2024 12:00:00 +0000</pubDate>"));
        assert!(text.contains("<guid>https://example.com/a</guid>"));
        assert!(text.contains("<source>Markets Wire</source>"));
    }

    #[test]
    fn test_markup_characters_escaped_and_parse_back() {
        let title = r#"P&G falls <5% on "guidance""#;
        let doc = render_feed(&[entry(title)], build_date()).unwrap();

        // The document must survive a real feed parser, and the title must
        // come back intact.
        let parsed = feed_rs::parser::parse(doc.as_slice()).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(
            parsed.entries[0].title.as_ref().unwrap().content,
            title
        );
    }

    #[test]
    fn test_entry_order_preserved() {
        let doc = render_feed(&[entry("first"), entry("second")], build_date()).unwrap();
        let text = String::from_utf8(doc).unwrap();

        let first = text.find("<title>first</title>").unwrap();
        let second = text.find("<title>second</title>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_write_feed_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combined.xml");

        write_feed(&[entry("one"), entry("two")], &path).unwrap();
        write_feed(&[entry("only")], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("<title>only</title>"));
        assert!(!text.contains("<title>one</title>"));
    }
}
