//! Handling of the landing URL Stripe redirects back to.

use checkout_types::PlanTier;
use url::Url;

/// Query parameter set to `success` on the return URL.
pub const CHECKOUT_PARAM: &str = "checkout";

const PLAN_PARAM: &str = "plan";

/// A completed checkout, as reported by the return URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReturn {
    /// Plan the user just bought
    pub plan: String,

    /// The return URL without the `checkout` marker, safe to show or bookmark
    pub cleaned_url: Url,
}

impl CheckoutReturn {
    /// Known tier for the purchased plan, if it is one.
    pub fn tier(&self) -> Option<PlanTier> {
        self.plan.parse().ok()
    }
}

/// Recognizes `?checkout=success&plan=<plan>` on a return URL.
///
/// Returns None for any other URL, including a success marker without a plan.
pub fn parse_checkout_return(url: &Url) -> Option<CheckoutReturn> {
    let mut succeeded = false;
    let mut plan = None;

    for (key, value) in url.query_pairs() {
        match &*key {
            CHECKOUT_PARAM => succeeded = value == "success",
            PLAN_PARAM => plan = Some(value.into_owned()),
            _ => {}
        }
    }

    let plan = plan.filter(|p| !p.is_empty())?;
    if !succeeded {
        return None;
    }

    Some(CheckoutReturn {
        plan,
        cleaned_url: without_param(url, CHECKOUT_PARAM),
    })
}

fn without_param(url: &Url, name: &str) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut cleaned = url.clone();
    if kept.is_empty() {
        cleaned.set_query(None);
    } else {
        cleaned.query_pairs_mut().clear().extend_pairs(kept.iter());
    }
    cleaned
}
