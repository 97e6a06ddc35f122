//! Integration tests for the fraud engine.

use fraud_engine::{analyze, AnalysisInput, Config, RiskLevel};

fn fixture_input() -> AnalysisInput {
  let json = r#"{
    "query": "dyson hair dryer",
    "listings": [
      {
        "title": "Dyson Supersonic Hair Dryer",
        "price": 429.99,
        "price_raw": "$429.99",
        "source": "Dyson",
        "link": "https://example.com/dyson-1",
        "rating": 4.7,
        "reviews": 8210,
        "seller": {"name": "Dyson", "rating": 4.7},
        "platform": "google_shopping",
        "condition": "new"
      },
      {
        "title": "Dyson Supersonic Hair Dryer (Nickel/Copper)",
        "price": 399.99,
        "price_raw": "$399.99",
        "source": "Best Buy",
        "link": "https://example.com/dyson-2",
        "rating": 4.8,
        "reviews": 5120,
        "seller": {"name": "Best Buy", "rating": 4.8},
        "platform": "google_shopping",
        "condition": "new"
      },
      {
        "title": "Dyson Supersonic hair dryer BRAND NEW SEALED",
        "price": 89.0,
        "price_raw": "$89.00",
        "source": "eBay",
        "link": "https://example.com/dyson-3",
        "rating": 0,
        "reviews": 0,
        "seller": {"name": "quickflip2024", "rating": 0},
        "platform": "ebay",
        "condition": "new"
      },
      {
        "title": "Laifen Swift High-Speed Hair Dryer",
        "price": 139.99,
        "price_raw": "$139.99",
        "source": "Amazon",
        "link": "https://example.com/laifen-1",
        "rating": 4.5,
        "reviews": 3300,
        "seller": {"name": "Amazon", "rating": 4.5},
        "platform": "google_shopping",
        "condition": "new"
      },
      {
        "title": "Kids Toy Hair Dryer Pretend Play Salon Set",
        "price": 14.99,
        "price_raw": "$14.99",
        "source": "ToyWorld",
        "link": "https://example.com/toy-1",
        "rating": 4.1,
        "reviews": 55,
        "seller": {"name": "ToyWorld", "rating": 4.1},
        "platform": "google_shopping",
        "condition": "new"
      }
    ]
  }"#;
  serde_json::from_str(json).unwrap()
}

#[test]
fn fixture_set_scores_the_suspicious_listing_highest() {
  let out = analyze(&fixture_input(), &Config::default());

  assert_eq!(out.reports.len(), 5);

  // The toy listing is filtered with a reason.
  let toy = out
    .reports
    .iter()
    .find(|r| r.listing.title.contains("Pretend Play"))
    .unwrap();
  assert!(!toy.is_valid_product);
  assert!(toy.invalid_reason.as_deref().unwrap().contains("toy"));
  assert_eq!(out.filtered_reasons.values().sum::<usize>(), 1);

  // Price stats cover the four valid listings.
  let stats = out.price_statistics.as_ref().unwrap();
  assert_eq!(stats.count, 4);
  assert_eq!(stats.max, 429.99);
  assert_eq!(stats.min, 89.0);

  // The zero-review eBay flip is the riskiest listing.
  let flip = out
    .reports
    .iter()
    .find(|r| r.listing.seller.name == "quickflip2024")
    .unwrap();
  assert_eq!(flip.risk_level, Some(RiskLevel::High));
  assert!(flip.risk_score.unwrap() >= 0.55);
  assert!(flip.risk_factors.len() >= 3);

  // Trusted retailers come out low-risk despite price spread.
  let dyson = out
    .reports
    .iter()
    .find(|r| r.listing.seller.name == "Dyson")
    .unwrap();
  assert_eq!(dyson.risk_level, Some(RiskLevel::Low));

  // Tier ordering follows price.
  let laifen = out
    .reports
    .iter()
    .find(|r| r.listing.seller.name == "Amazon")
    .unwrap();
  assert!(laifen.price_percentile.unwrap() < dyson.price_percentile.unwrap());

  assert_eq!(out.risk_summary.high_risk_count, 1);
  assert!(out.recommendations.best_deal.is_some());
}

#[test]
fn every_valid_report_carries_an_analysis() {
  let out = analyze(&fixture_input(), &Config::default());
  for r in out.reports.iter().filter(|r| r.is_valid_product) {
    let analysis = r.fraud_analysis.as_ref().unwrap();
    assert!((0.0..=1.0).contains(&analysis.scam_probability));
    assert!(!analysis.reasoning.is_empty());
  }
}

#[test]
fn small_sets_still_score_price_outliers() {
  let json = r#"{
    "query": "desk lamp",
    "listings": [
      {
        "title": "LED Desk Lamp with USB Port",
        "price": 90.0,
        "rating": 4.3,
        "reviews": 210,
        "seller": {"name": "lampshop", "rating": 4.3},
        "platform": "google_shopping"
      },
      {
        "title": "Adjustable Architect Desk Lamp",
        "price": 110.0,
        "rating": 4.5,
        "reviews": 480,
        "seller": {"name": "deskworld", "rating": 4.5},
        "platform": "google_shopping"
      },
      {
        "title": "Designer Desk Lamp Limited Edition",
        "price": 5000.0,
        "rating": 4.0,
        "reviews": 12,
        "seller": {"name": "luxlamps", "rating": 4.0},
        "platform": "google_shopping"
      }
    ]
  }"#;
  let input: AnalysisInput = serde_json::from_str(json).unwrap();
  let out = analyze(&input, &Config::default());

  // Three valid listings: too few for price-deviation scoring, but the
  // >10x-median flag still carries its penalty and factor string.
  let pricey = out
    .reports
    .iter()
    .find(|r| r.listing.price == 5000.0)
    .unwrap();
  assert!(pricey.price_outlier);
  assert!(pricey.risk_score.unwrap() >= 0.2);
  assert!(pricey.risk_factors.iter().any(|f| f.contains("median")));

  let modest = out
    .reports
    .iter()
    .find(|r| r.listing.price == 90.0)
    .unwrap();
  assert!(!modest.price_outlier);
  assert_eq!(modest.risk_score, Some(0.0));
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"{
    "query": "laptop",
    "listings": [
      {
        "title": "Dell XPS 13 Laptop",
        "price": 999.0,
        "platform": "google_shopping",
        "some_unknown_field": "ignored",
        "another": 42
      }
    ]
  }"#;
  let input: AnalysisInput = serde_json::from_str(json).unwrap();
  let out = analyze(&input, &Config::default());
  assert_eq!(out.reports.len(), 1);
  assert!(out.reports[0].is_valid_product);
}

#[test]
fn empty_listing_set_is_handled() {
  let input = AnalysisInput {
    query: "anything".to_string(),
    listings: Vec::new(),
  };
  let out = analyze(&input, &Config::default());
  assert!(out.reports.is_empty());
  assert!(out.price_statistics.is_none());
  assert!(out.recommendations.best_deal.is_none());
}
