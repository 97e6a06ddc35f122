//! Listing validity classification and title-derived attributes.
//!
//! Filters spam listings, toy versions of real products (unless the query
//! asks for toys), and tags digital goods. Also mines feature keywords and
//! spec fragments out of titles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Condition, Listing, Specs};

const SPAM_KEYWORDS: &[&str] = &[
  "click here",
  "limited time offer",
  "act now",
  "guarantee",
  "100% free",
  "no risk",
  "buy now",
  "order now",
  "call now",
  "amazing deal",
  "unbelievable price",
];

/// General toy markers that apply to every product category.
const TOY_INDICATORS: &[&str] = &[
  "toy",
  "pretend",
  "play set",
  "playset",
  "playhouse",
  "kids",
  "children",
  "toddler",
  "child",
  "baby",
  "for kids",
  "for children",
  "leapfrog",
  "vtech",
  "fisher-price",
  "little tikes",
  "step2",
  "melissa & doug",
  "kidkraft",
  "power wheels",
  "educational toy",
  "learning toy",
  "stem toy",
  "miniature",
  "mini version",
  "dollhouse",
  "doll house",
  "pretend play",
  "role play",
  "imaginative play",
  "play kitchen",
  "play food",
  "play tools",
  "wooden toy",
  "plastic toy",
];

const DIGITAL_INDICATORS: &[&str] = &[
  "download",
  "digital code",
  "gift card",
  "e-book",
  "ebook",
  "software license",
  "digital download",
  "instant download",
];

/// Product categories with their own toy-version vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
  Vehicle,
  Furniture,
  Electronics,
  Appliances,
}

impl Category {
  const ALL: [Category; 4] = [
    Self::Vehicle,
    Self::Furniture,
    Self::Electronics,
    Self::Appliances,
  ];

  fn name(self) -> &'static str {
    match self {
      Self::Vehicle => "vehicle",
      Self::Furniture => "furniture",
      Self::Electronics => "electronics",
      Self::Appliances => "appliances",
    }
  }

  /// Query words that put a search in this category.
  fn query_keywords(self) -> &'static [&'static str] {
    match self {
      Self::Vehicle => &["car", "cars", "truck", "vehicle", "auto", "suv", "van"],
      Self::Furniture => &[
        "furniture", "table", "chair", "desk", "sofa", "couch", "bed", "kitchen",
      ],
      Self::Electronics => &["laptop", "computer", "tablet", "phone", "iphone", "ipad"],
      Self::Appliances => &[
        "blender",
        "vacuum",
        "microwave",
        "washer",
        "dryer",
        "refrigerator",
      ],
    }
  }

  /// Title patterns that mark a toy version of this category.
  fn toy_patterns(self) -> &'static [&'static str] {
    match self {
      Self::Vehicle => &[
        "ride on",
        "ride-on",
        "push car",
        "pedal car",
        "remote control",
        "rc ",
        "r/c",
        "12v",
        "6v",
        "24v battery",
        "electric car for kids",
        "kids electric",
        "model car",
        "die-cast",
        "diecast",
        "scale model",
        "1:24",
        "1:18",
        "1:12",
        "1:64",
        "1:43",
        "hot wheels",
        "matchbox",
        "tonka",
      ],
      Self::Furniture => &[
        "play kitchen",
        "toy kitchen",
        "kids kitchen",
        "play table",
        "kids table",
        "toddler table",
        "play chair",
        "kids chair",
        "toddler chair",
        "play tent",
        "kids tent",
        "play house",
        "doll furniture",
        "dollhouse furniture",
        "plastic furniture",
        "foam furniture",
      ],
      Self::Electronics => &[
        "toy laptop",
        "kids laptop",
        "learning laptop",
        "toy tablet",
        "kids tablet",
        "learning tablet",
        "toy phone",
        "kids phone",
        "play phone",
        "toy computer",
        "kids computer",
        "electronic learning",
        "learning system",
        "educational tablet",
        "kidizoom",
      ],
      Self::Appliances => &[
        "toy blender",
        "play blender",
        "kids blender",
        "toy vacuum",
        "play vacuum",
        "kids vacuum",
        "toy microwave",
        "play microwave",
        "toy washing machine",
        "play washer",
        "play appliance",
        "toy appliance",
      ],
    }
  }

  fn query_matches(self, query: &str) -> bool {
    self.query_keywords().iter().any(|k| query.contains(k))
  }
}

/// Validate one listing against the query context.
///
/// Returns `None` when the listing is valid, `Some(reason)` when it should
/// be filtered out.
pub fn validate(listing: &Listing, query: &str) -> Option<String> {
  let title = listing.title.to_lowercase();

  if title.trim().len() < 5 {
    return Some("Invalid or missing title".to_string());
  }
  if listing.price <= 0.0 {
    return Some("No valid price found".to_string());
  }

  let spam_hits = SPAM_KEYWORDS.iter().filter(|k| title.contains(*k)).count();
  if spam_hits >= 2 {
    return Some("Contains multiple spam/scam keywords".to_string());
  }

  if !query_wants_toys(query) {
    if let Some(reason) = toy_reason(&title, listing.price, &query.to_lowercase()) {
      return Some(reason);
    }
  }

  None
}

/// Non-fatal caveat for an otherwise valid listing (digital goods).
pub fn validity_warning(listing: &Listing) -> Option<String> {
  let title = listing.title.to_lowercase();
  if DIGITAL_INDICATORS.iter().any(|k| title.contains(k)) {
    Some("Digital product detected".to_string())
  } else {
    None
  }
}

/// True when the query itself asks for toy products.
pub fn query_wants_toys(query: &str) -> bool {
  let q = query.to_lowercase();
  ["toy", "toys", "kids", "children", "toddler", "baby"]
    .iter()
    .any(|t| q.contains(t))
}

/// Toy detection across all categories. `title` and `query` are lowercase.
fn toy_reason(title: &str, price: f64, query: &str) -> Option<String> {
  if TOY_INDICATORS.iter().any(|k| title.contains(k)) {
    return Some("Product is a toy (contains toy indicators)".to_string());
  }

  for cat in Category::ALL {
    if cat.query_matches(query) && cat.toy_patterns().iter().any(|p| title.contains(p)) {
      return Some(format!(
        "Product is a toy {}, not a real {}",
        cat.name(),
        cat.name()
      ));
    }
  }

  // Price-gated heuristics for categories where cheap lookalikes are common.
  if Category::Vehicle.query_matches(query) && price > 0.0 && price < 1000.0 {
    let electric = ["electric", "battery", "12v", "6v", "rechargeable"];
    let toy_brands = ["aosom", "costway", "best ride on", "kid trax"];
    if electric.iter().any(|k| title.contains(k)) && toy_brands.iter().any(|b| title.contains(b)) {
      return Some("Product is a battery-powered toy car".to_string());
    }
  }
  if Category::Electronics.query_matches(query) && price > 0.0 && price < 50.0 {
    if ["kids", "learning", "educational"].iter().any(|k| title.contains(k)) {
      return Some("Product is a toy laptop/tablet".to_string());
    }
  }
  if Category::Furniture.query_matches(query) && price > 0.0 && price < 100.0 {
    if ["plastic", "play", "kids", "little tikes"].iter().any(|k| title.contains(k)) {
      return Some("Product is toy furniture".to_string());
    }
  }

  None
}

/// Feature keywords worth surfacing on product cards.
pub fn extract_features(listing: &Listing) -> Vec<String> {
  const FEATURE_KEYWORDS: &[&str] = &[
    "wireless",
    "bluetooth",
    "wifi",
    "smart",
    "digital",
    "automatic",
    "manual",
    "portable",
    "compact",
    "lightweight",
    "heavy duty",
    "professional",
    "premium",
    "deluxe",
    "certified",
    "unlocked",
    "sealed",
    "brand new",
  ];
  let title = listing.title.to_lowercase();
  FEATURE_KEYWORDS
    .iter()
    .filter(|k| title.contains(*k))
    .map(|k| k.to_string())
    .collect()
}

static MEMORY_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d+)\s*(gb|tb)(?:\s+(ram|ssd|storage|memory|emmc))?").unwrap());
static SCREEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\d+\.?\d*)\s*(?:inch|"|')"#).unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20[0-2]\d)\b").unwrap());
static MILEAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(k)?\s*(?:miles?|km)").unwrap());
static WEIGHT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*(lbs?|kg|oz|pounds?)").unwrap());
static DIMENSION_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*x\s*(\d+\.?\d*)\s*x\s*(\d+\.?\d*)").unwrap());
static POWER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d+)\s*(v|w|volt|watt)(\s*battery)?").unwrap());
static CAPACITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*(mah|ah|l|ml|oz)").unwrap());

/// Mine numeric spec fragments and condition out of a listing title.
pub fn extract_specs(listing: &Listing) -> Specs {
  let title = listing.title.to_lowercase();
  let mut specs = Specs::default();

  for cap in MEMORY_RE.captures_iter(&title) {
    let mut amount: u32 = cap[1].parse().unwrap_or(0);
    if &cap[2] == "tb" {
      amount = amount.saturating_mul(1000);
    }
    match cap.get(3).map(|m| m.as_str()) {
      Some("ram") | Some("memory") => specs.ram_gb = Some(amount),
      _ => specs.storage_gb = Some(amount),
    }
  }

  if let Some(cap) = SCREEN_RE.captures(&title) {
    specs.screen_size_inches = cap[1].parse().ok();
  }
  if let Some(cap) = YEAR_RE.captures(&title) {
    specs.year = cap[1].parse().ok();
  }
  if let Some(cap) = MILEAGE_RE.captures(&title) {
    let miles: u32 = cap[1].parse().unwrap_or(0);
    specs.mileage = Some(if cap.get(2).is_some() {
      miles.saturating_mul(1000)
    } else {
      miles
    });
  }
  if let Some(cap) = WEIGHT_RE.captures(&title) {
    specs.weight = cap[1].parse().ok();
    specs.weight_unit = Some(cap[2].to_string());
  }
  if let Some(cap) = DIMENSION_RE.captures(&title) {
    specs.dimensions = Some(format!("{}x{}x{}", &cap[1], &cap[2], &cap[3]));
  }
  // Battery-pack voltages ("12v battery") are toy markers, not product power.
  for cap in POWER_RE.captures_iter(&title) {
    if cap.get(3).is_some() {
      continue;
    }
    specs.power = cap[1].parse().ok();
    specs.power_unit = Some(cap[2].to_string());
    break;
  }
  if let Some(cap) = CAPACITY_RE.captures(&title) {
    specs.capacity = cap[1].parse().ok();
    specs.capacity_unit = Some(cap[2].to_string());
  }

  specs.condition = if listing.condition != Condition::Unknown {
    listing.condition
  } else {
    detect_condition_from_title(&title)
  };

  // Brand: first capitalized word near the front of the title.
  for word in listing.title.split_whitespace().take(3) {
    if word.len() > 2 && word.chars().next().is_some_and(|c| c.is_uppercase()) {
      specs.brand = Some(word.to_string());
      break;
    }
  }

  specs
}

fn detect_condition_from_title(title: &str) -> Condition {
  if ["refurbished", "restored", "renewed", "refurb"]
    .iter()
    .any(|k| title.contains(k))
  {
    Condition::Refurbished
  } else if title.contains("used") || title.contains("pre-owned") {
    Condition::Used
  } else if title.contains("new") {
    Condition::New
  } else {
    Condition::Unknown
  }
}
