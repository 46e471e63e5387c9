// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 对组合生成的 HTML 片段逐一校验内置规则的判定条件

use wcagrs::domain::dom::{DomParser, ScraperParser};
use wcagrs::domain::rules::{ImgAltRule, InputLabelRule, TitleRule, WcagAnalyser, WcagRule};

const TITLES: [Option<&str>; 4] = [None, Some(""), Some("   "), Some(" Home ")];
const ALTS: [Option<&str>; 4] = [None, Some(""), Some(" "), Some("logo")];
/// (input id, label for)
const INPUTS: [(Option<&str>, Option<&str>); 5] = [
    (None, None),
    (Some(""), Some("")),
    (Some("email"), None),
    (Some("email"), Some("Email")),
    (Some("email"), Some("email")),
];

fn image(alt: Option<&str>) -> String {
    match alt {
        Some(alt) => format!(r#"<img src="a.png" alt="{}">"#, alt),
        None => r#"<img src="a.png">"#.to_string(),
    }
}

fn input(id: Option<&str>, label_for: Option<&str>) -> String {
    let label = label_for
        .map(|f| format!(r#"<label for="{}">Field</label>"#, f))
        .unwrap_or_default();
    let input = match id {
        Some(id) => format!(r#"<input type="text" id="{}">"#, id),
        None => r#"<input type="text">"#.to_string(),
    };
    format!("{}{}", label, input)
}

#[test]
fn test_title_rule_matches_trimmed_first_title() {
    for title in TITLES {
        let head = title
            .map(|t| format!("<title>{}</title>", t))
            .unwrap_or_default();
        let doc = ScraperParser.parse_from_string(&format!("<head>{}</head><body></body>", head));

        let expected = title.map(|t| !t.trim().is_empty()).unwrap_or(false);
        assert_eq!(TitleRule.analyse(&doc).passed, expected, "title {:?}", title);
    }
}

#[test]
fn test_img_alt_counts_sum_to_undescribed_images() {
    // Every pair of alt variants, so each page has two images
    for first in ALTS {
        for second in ALTS {
            let html = format!("<body>{}{}</body>", image(first), image(second));
            let result = ImgAltRule.analyse(&ScraperParser.parse_from_string(&html));
            let details = result.details.unwrap();

            let undescribed = [first, second]
                .iter()
                .filter(|alt| alt.map(|a| a.trim().is_empty()).unwrap_or(true))
                .count() as u64;
            let missing = details["imagesWithoutAlt"].as_u64().unwrap();
            let empty = details["imagesWithEmptyAlt"].as_u64().unwrap();

            assert_eq!(details["totalImages"], 2);
            assert_eq!(missing + empty, undescribed, "{}", html);
            assert_eq!(result.passed, undescribed == 0, "{}", html);
        }
    }
}

#[test]
fn test_input_label_requires_exact_id_match() {
    for (id, label_for) in INPUTS {
        let html = format!("<body>{}</body>", input(id, label_for));
        let result = InputLabelRule.analyse(&ScraperParser.parse_from_string(&html));

        let labeled = matches!((id, label_for), (Some(id), Some(f)) if !id.is_empty() && id == f);
        assert_eq!(result.passed, labeled, "{}", html);
        assert_eq!(
            result.details.unwrap()["inputsWithoutLabel"],
            if labeled { 0 } else { 1 }
        );
    }
}

#[test]
fn test_analyser_is_deterministic_across_parses() {
    let analyser = WcagAnalyser::with_default_rules();
    for alt in ALTS {
        for (id, label_for) in INPUTS {
            let html = format!(
                "<title>T</title><body>{}{}</body>",
                image(alt),
                input(id, label_for)
            );
            let first = analyser.analyse(&ScraperParser.parse_from_string(&html));
            let second = analyser.analyse(&ScraperParser.parse_from_string(&html));
            assert_eq!(first, second);
            assert_eq!(
                first.keys().collect::<Vec<_>>(),
                vec!["img-alt-check", "input-label-check", "title-check"]
            );
        }
    }
}
