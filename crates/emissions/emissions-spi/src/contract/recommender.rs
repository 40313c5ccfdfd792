//! Reduction recommendation lookup.

use crate::model::Category;

/// Supplies a reduction suggestion for an emissions category.
pub trait Recommender: Send + Sync {
    fn recommendation(&self, category: Category) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRecommender(&'static str);

    impl Recommender for FixedRecommender {
        fn recommendation(&self, _category: Category) -> &str {
            self.0
        }
    }

    #[test]
    fn test_recommender_is_object_safe() {
        let recommender: Box<dyn Recommender> = Box::new(FixedRecommender("switch suppliers"));
        assert_eq!(
            recommender.recommendation(Category::PurchasedElectricity),
            "switch suppliers"
        );
    }
}
