//! Smart buying recommendations over scored listings.

use crate::types::{BestDeal, ListingReport, Recommendations, RiskLevel};

/// Best deal = cheapest LOW-risk listing; also counts MEDIUM-risk listings.
pub fn recommendations(reports: &[ListingReport]) -> Recommendations {
  let mut rec = Recommendations::default();

  let best = reports
    .iter()
    .filter(|r| r.is_valid_product && r.risk_level == Some(RiskLevel::Low))
    .min_by(|a, b| a.listing.price.total_cmp(&b.listing.price));
  if let Some(r) = best {
    rec.best_deal = Some(BestDeal {
      title: r.listing.title.clone(),
      price: r.listing.price,
      link: r.listing.link.clone(),
      reason: "Lowest price among low-risk products".to_string(),
    });
  }

  let caution = reports
    .iter()
    .filter(|r| r.is_valid_product && r.risk_level == Some(RiskLevel::Medium))
    .count();
  if caution > 0 {
    rec.proceed_with_caution = Some(caution);
  }

  rec
}
