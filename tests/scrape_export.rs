//! Extraction-to-export checks: detail page HTML through flattening into
//! the tabular sink.

use cardscrape::export;
use cardscrape::scrape::card_detail;

const CARD_A: &str = r#"
    <div class="heading"><div>Mystical Elf</div></div>
    <div class="above"><div class="hlist"><dl>
      <dt>Japanese</dt><dd>ホーリー・エルフ</dd>
    </dl></div></div>
    <div class="imagecolumn">
      <img src="/images/elf.png" alt="Mystical Elf" width="300" height="440"
           data-file-width="600" data-file-height="880">
    </div>
    <div class="infocolumn"><table class="innertable">
      <tr><th>Number</th><td>002</td></tr>
      <tr><td><p>A delicate elf.</p></td></tr>
    </table></div>
"#;

const CARD_B: &str = r#"
    <div class="heading"><div>Baby Dragon</div></div>
    <div class="infocolumn"><table class="innertable">
      <tr><th>Number</th><td>004</td></tr>
      <tr><th>Rarity</th><td>C</td></tr>
    </table></div>
"#;

#[test]
fn csv_columns_are_the_union_across_records() {
    let cards = vec![
        card_detail::parse_card_page(CARD_A),
        card_detail::parse_card_page(CARD_B),
    ];
    let flat: Vec<_> = cards.iter().map(|card| card.flatten()).collect();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.csv");
    export::write_csv(&path, &flat).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    // Union of both records: B has no languages and no image.
    assert!(header.contains("card_name"));
    assert!(header.contains("language_Japanese"));
    assert!(header.contains("image_src"));
    assert!(header.contains("info_number"));
    assert!(header.contains("info_rarity"));
    assert!(header.contains("info_lore"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn detail_json_export_round_trips() {
    let cards = vec![
        card_detail::parse_card_page(CARD_A),
        card_detail::parse_card_page(CARD_B),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.json");
    export::write_json(&path, &cards).unwrap();

    let reloaded: Vec<cardscrape::models::CardDetail> = export::read_json(&path).unwrap();
    assert_eq!(reloaded, cards);
    assert_eq!(reloaded[0].info["lore"], "A delicate elf.");
    assert_eq!(reloaded[1].card_name, "Baby Dragon");
    assert!(reloaded[1].image.is_empty());
}
