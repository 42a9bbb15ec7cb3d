//! Outbound sync tasks.

use serde::{Deserialize, Serialize};

use offersync_core::{Article, Money, ProfileUid};

/// The absolute value a task pushes to the marketplace.
///
/// On the wire the variants appear as `targetPriceMinorUnits` or
/// `targetQuantity`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetValue {
    #[serde(rename = "targetPriceMinorUnits")]
    Price(Money),
    #[serde(rename = "targetQuantity")]
    Quantity(u32),
}

impl core::fmt::Display for TargetValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Price(price) => write!(f, "{price}"),
            Self::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}

/// One unit of outbound work: push one absolute value for one article to one
/// profile's marketplace account.
///
/// Tasks carry the final computed value, never inputs to recompute from, so a
/// re-delivered or duplicated task writes the same thing again: last write
/// wins and every delivery is idempotent. `attempt` is the only state that
/// survives a failed delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncTask {
    #[serde(rename = "profileId")]
    pub profile: ProfileUid,
    pub article: Article,
    #[serde(flatten)]
    pub target: TargetValue,
    pub attempt: u32,
}

impl SyncTask {
    pub fn price(profile: ProfileUid, article: Article, target: Money) -> Self {
        Self {
            profile,
            article,
            target: TargetValue::Price(target),
            attempt: 0,
        }
    }

    pub fn quantity(profile: ProfileUid, article: Article, target: u32) -> Self {
        Self {
            profile,
            article,
            target: TargetValue::Quantity(target),
            attempt: 0,
        }
    }

    /// The same task, one attempt further.
    pub fn next_attempt(&self) -> Self {
        let mut task = self.clone();
        task.attempt += 1;
        task
    }

    /// Short kind tag for logs.
    pub fn kind(&self) -> &'static str {
        match self.target {
            TargetValue::Price(_) => "price",
            TargetValue::Quantity(_) => "stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_task_wire_shape() {
        let profile = ProfileUid::new();
        let task = SyncTask::price(profile, Article::new("ART-1"), Money::from_minor(13000));

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "profileId": profile.to_string(),
                "article": "ART-1",
                "targetPriceMinorUnits": 13000,
                "attempt": 0,
            })
        );
    }

    #[test]
    fn quantity_task_wire_shape() {
        let profile = ProfileUid::new();
        let task = SyncTask::quantity(profile, Article::new("ART-1"), 6);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "profileId": profile.to_string(),
                "article": "ART-1",
                "targetQuantity": 6,
                "attempt": 0,
            })
        );
    }

    #[test]
    fn roundtrips_through_json() {
        let task = SyncTask::quantity(ProfileUid::new(), Article::new("ART-2"), 0).next_attempt();

        let encoded = serde_json::to_string(&task).unwrap();
        let decoded: SyncTask = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, task);
        assert_eq!(decoded.attempt, 1);
    }

    #[test]
    fn next_attempt_changes_nothing_else() {
        let task = SyncTask::price(ProfileUid::new(), Article::new("ART-1"), Money::from_minor(1));
        let retried = task.next_attempt();

        assert_eq!(retried.attempt, 1);
        assert_eq!(retried.profile, task.profile);
        assert_eq!(retried.article, task.article);
        assert_eq!(retried.target, task.target);
    }
}
