use pricer_core::{comp_rows, Comp, CompStatus};

fn comp(title: &str, price: f64) -> Comp {
    Comp {
        title: title.to_string(),
        price,
        url: format!("https://listings.example/{title}"),
        ..Comp::default()
    }
}

#[test]
fn empty_list_renders_no_rows() {
    assert!(comp_rows(&[]).is_empty());
}

#[test]
fn one_row_per_comp_preserving_input_order() {
    let comps = vec![comp("b-table", 40.0), comp("a-chair", 25.0), comp("c-lamp", 10.0)];

    let rows = comp_rows(&comps);

    assert_eq!(rows.len(), 3);
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["b-table", "a-chair", "c-lamp"]);
}

#[test]
fn thumbnail_wins_over_legacy_thumb() {
    let both = Comp {
        thumbnail: Some("https://img.example/new.jpg".to_string()),
        thumb: Some("https://img.example/old.jpg".to_string()),
        ..comp("mirror", 75.0)
    };
    let legacy_only = Comp {
        thumb: Some("https://img.example/old.jpg".to_string()),
        ..comp("clock", 75.0)
    };

    let rows = comp_rows(&[both, legacy_only]);

    assert_eq!(
        rows[0].thumbnail.as_deref(),
        Some("https://img.example/new.jpg")
    );
    assert_eq!(
        rows[1].thumbnail.as_deref(),
        Some("https://img.example/old.jpg")
    );
}

#[test]
fn ended_at_wins_over_legacy_sold_date() {
    let sold = Comp {
        status: CompStatus::Sold,
        ended_at: Some("2025-06-01".to_string()),
        sold_date: Some("2025-01-01".to_string()),
        ..comp("vase", 30.0)
    };

    let rows = comp_rows(&[sold]);
    assert_eq!(rows[0].date_label, "2025-06-01");
}

#[test]
fn date_shown_only_for_sold_listings() {
    let active = Comp {
        status: CompStatus::Active,
        ended_at: Some("2025-06-01".to_string()),
        ..comp("chair", 55.0)
    };
    let sold = Comp {
        status: CompStatus::Sold,
        sold_date: Some("2024-11-12".to_string()),
        ..comp("desk", 90.0)
    };

    let rows = comp_rows(&[active, sold]);

    assert_eq!(rows[0].status_label, "Active");
    assert_eq!(rows[0].date_label, "");
    assert_eq!(rows[1].status_label, "Sold");
    assert_eq!(rows[1].date_label, "2024-11-12");
}

#[test]
fn price_defaults_to_dollar_prefix_with_two_decimals() {
    let rows = comp_rows(&[comp("stool", 12.0)]);
    assert_eq!(rows[0].price_label, "$12.00");
}

#[test]
fn price_uses_currency_code_prefix_when_present() {
    let comps = vec![Comp {
        currency: Some("EUR".to_string()),
        ..comp("cabinet", 12.5)
    }];

    let rows = comp_rows(&comps);
    assert_eq!(rows[0].price_label, "EUR 12.50");
}
