pub mod table;

use scraper::{ElementRef, Html};
use tracing::debug;

/// Structural tags never harvested, attributes or not.
const IGNORE_TAGS: &[&str] = &["script", "metadata", "link", "style", "svg", "path"];

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub tag: String,
    pub class: Option<String>,
    pub id: String,
    pub text: String,
}

/// Walk the parsed tree in document order (pre-order, depth-first) and emit
/// one record per element that carries both a class and an id attribute.
///
/// Parsing is best-effort: malformed markup yields a repaired tree, never an
/// error. Children of ignored elements are still visited.
pub fn harvest(markup: &str) -> Vec<TagRecord> {
    let document = Html::parse_document(markup);
    let mut records = Vec::new();

    for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
        let el = element.value();
        let tag = el.name();
        if IGNORE_TAGS.contains(&tag) {
            continue;
        }

        let (class_attr, id) = match (el.attr("class"), el.attr("id")) {
            (Some(class_attr), Some(id)) => (class_attr, id),
            _ => continue,
        };

        records.push(TagRecord {
            tag: tag.to_string(),
            class: join_classes(class_attr),
            id: id.to_string(),
            text: element.text().collect::<String>().trim().to_string(),
        });
    }

    debug!("Harvested {} records", records.len());
    records
}

/// Space-join the class list, preserving source order and multiplicity.
/// An empty class attribute is an empty list and maps to None.
fn join_classes(class_attr: &str) -> Option<String> {
    let classes: Vec<&str> = class_attr.split_whitespace().collect();
    if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_elements_with_both_attributes() {
        let markup = r#"<div class="a b" id="x">Hi</div><script class="c" id="y">ignored</script>"#;
        let records = harvest(markup);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            TagRecord {
                tag: "div".into(),
                class: Some("a b".into()),
                id: "x".into(),
                text: "Hi".into(),
            }
        );
    }

    #[test]
    fn skips_elements_missing_either_attribute() {
        let markup = r#"<div class="only-class">a</div><div id="only-id">b</div><div>c</div>"#;
        assert!(harvest(markup).is_empty());
    }

    #[test]
    fn ignored_tags_never_emit() {
        for tag in IGNORE_TAGS {
            let markup = format!(r#"<{tag} class="c" id="x">body</{tag}>"#);
            assert!(harvest(&markup).is_empty(), "tag <{}> should be ignored", tag);
        }
    }

    #[test]
    fn record_order_is_document_order() {
        let markup = r#"<section class="s" id="outer"><span class="t" id="inner">deep</span></section><div class="d" id="tail">end</div>"#;
        let records = harvest(markup);
        let tags: Vec<&str> = records.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["section", "span", "div"]);
        assert_eq!(records[0].text, "deep");

        // Identical input, identical ordered output.
        assert_eq!(harvest(markup), records);
    }

    #[test]
    fn class_order_preserved_verbatim() {
        let markup = r#"<div class="beta alpha beta" id="x">t</div>"#;
        let records = harvest(markup);
        assert_eq!(records[0].class.as_deref(), Some("beta alpha beta"));
    }

    #[test]
    fn empty_class_attribute_maps_to_none() {
        let markup = r#"<div class="" id="promo">Hiring</div>"#;
        let records = harvest(markup);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class, None);
        assert_eq!(records[0].id, "promo");
    }

    #[test]
    fn empty_id_attribute_keeps_record() {
        let markup = r#"<div class="c" id="">t</div>"#;
        let records = harvest(markup);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "");
    }

    #[test]
    fn text_joins_descendants_trimming_ends_only() {
        let markup = r#"<div class="c" id="i">  Hello <b>big</b>  world  </div>"#;
        let records = harvest(markup);
        assert_eq!(records[0].text, "Hello big  world");
    }

    #[test]
    fn root_element_attributes_are_harvested() {
        let markup = r#"<html class="theme-dark" id="root"><body><p>t</p></body></html>"#;
        let records = harvest(markup);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, "html");
        assert_eq!(records[0].id, "root");
    }

    #[test]
    fn empty_markup_yields_no_records() {
        assert!(harvest("").is_empty());
    }

    #[test]
    fn malformed_markup_still_yields_records() {
        let markup = r#"<div class='a' id='x'>unclosed <p class='b' id='y'>para"#;
        let records = harvest(markup);
        let tags: Vec<&str> = records.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["div", "p"]);
        assert_eq!(records[0].text, "unclosed para");
        assert_eq!(records[1].text, "para");
    }

    #[test]
    fn directory_page() {
        let markup = std::fs::read_to_string("tests/fixtures/company_page.html").unwrap();
        let records = harvest(&markup);

        let tags: Vec<&str> = records.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(
            tags,
            ["nav", "a", "section", "article", "h2", "p", "article", "h2", "p", "div", "footer"]
        );

        assert_eq!(
            records[1],
            TagRecord {
                tag: "a".into(),
                class: Some("brand".into()),
                id: "logo".into(),
                text: "Acme".into(),
            }
        );
        assert_eq!(records[4].text, "Acme Widgets");
        assert_eq!(records[5].text, "Widgets, but  faster.");
        assert_eq!(records[9].class, None);
        assert_eq!(records[9].id, "promo");
        assert_eq!(records[10].text, "© Acme");

        // No ignored tag ever surfaces, whatever its attributes.
        assert!(records.iter().all(|r| !IGNORE_TAGS.contains(&r.tag.as_str())));
    }
}
