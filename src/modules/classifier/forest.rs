//! Tree-ensemble classifier evaluated from an exported model artifact.
//!
//! The artifact stores every tree in the parallel-array layout used by
//! scikit-learn (`children_left`, `children_right`, `feature`, `threshold`,
//! `value`). A node whose left child is `-1` is a leaf; internal nodes send a
//! sample left when `x[feature] <= threshold`, with `x` narrowed to `f32`.

use serde::Deserialize;

use super::PredictionError;

/// Marker for "no child" in `children_left` / `children_right`
const LEAF: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    DecisionTree,
    RandomForest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    /// Per-node class weights (counts or fractions), one row per node
    value: Vec<Vec<f64>>,
}

impl DecisionTree {
    /// Check the tree is well formed for `n_features` inputs and `n_classes` outputs
    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        let nodes = self.children_left.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }

        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != nodes)
        {
            return Err("tree arrays have different lengths".to_string());
        }

        for node in 0..nodes {
            if self.value[node].len() != n_classes {
                return Err(format!(
                    "node {} has {} class weights, expected {}",
                    node,
                    self.value[node].len(),
                    n_classes
                ));
            }

            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == LEAF {
                continue;
            }

            // Children always follow their parent, which also rules out cycles
            for child in [left, right] {
                if child <= node as i64 || child as usize >= nodes {
                    return Err(format!("node {} has invalid child index {}", node, child));
                }
            }

            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "node {} splits on feature {} but the model has {} features",
                    node, feature, n_features
                ));
            }
        }

        Ok(())
    }

    /// Class weights of the leaf reached by `x`.
    ///
    /// Inputs are narrowed to `f32` before comparing, as the trained model
    /// saw them; thresholds stay `f64` midpoints between `f32` values.
    fn leaf_value(&self, x: &[f64]) -> &[f64] {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            let value = (x[feature] as f32) as f64;
            node = if value <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        &self.value[node]
    }
}

/// Immutable classifier loaded from the model artifact
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsemble {
    kind: ModelKind,
    classes: Vec<String>,
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("model has no classes".to_string());
        }

        match (self.kind, self.trees.len()) {
            (_, 0) => return Err("model has no trees".to_string()),
            (ModelKind::DecisionTree, n) if n != 1 => {
                return Err(format!("decision tree model has {} trees", n));
            }
            _ => {}
        }

        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|e| format!("tree {}: {}", index, e))?;
        }

        Ok(())
    }

    /// Mean class probabilities across all trees
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if x.len() != self.n_features {
            return Err(PredictionError::DimensionMismatch {
                expected: self.n_features,
                actual: x.len(),
            });
        }

        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let weights = tree.leaf_value(x);
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                continue;
            }
            for (acc, weight) in proba.iter_mut().zip(weights) {
                *acc += weight / total;
            }
        }

        let n_trees = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n_trees);

        Ok(proba)
    }

    /// Most probable label; ties resolve to the class listed first
    pub fn predict(&self, x: &[f64]) -> Result<&str, PredictionError> {
        let proba = self.predict_proba(x)?;

        let mut best = 0usize;
        for (index, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = index;
            }
        }

        Ok(&self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Single split on feature 0 at 2.5: left -> Low, right -> High
    fn stump() -> serde_json::Value {
        json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [0, -2, -2],
            "threshold": [2.5, -2.0, -2.0],
            "value": [[5.0, 5.0], [5.0, 0.0], [0.0, 5.0]]
        })
    }

    fn model(kind: &str, trees: Vec<serde_json::Value>) -> TreeEnsemble {
        serde_json::from_value(json!({
            "kind": kind,
            "classes": ["Low", "High"],
            "n_features": 2,
            "trees": trees
        }))
        .unwrap()
    }

    #[test]
    fn test_decision_tree_follows_threshold() {
        let tree = model("decision_tree", vec![stump()]);
        tree.validate().unwrap();

        assert_eq!(tree.predict(&[1.0, 0.0]).unwrap(), "Low");
        assert_eq!(tree.predict(&[2.5, 0.0]).unwrap(), "Low");
        assert_eq!(tree.predict(&[2.6, 0.0]).unwrap(), "High");
    }

    #[test]
    fn test_threshold_compares_input_as_f32() {
        // Midpoint of the f32 training values 0.1 and 0.2
        let threshold = (0.1f32 as f64 + 0.2f32 as f64) / 2.0;
        let mut split = stump();
        split["threshold"] = json!([threshold, -2.0, -2.0]);
        let tree = model("decision_tree", vec![split]);

        // 0.15 < threshold in f64, but 0.15f32 lies above it
        assert!(0.15 < threshold);
        assert_eq!(tree.predict(&[0.15, 0.0]).unwrap(), "High");
        assert_eq!(tree.predict(&[0.1, 0.0]).unwrap(), "Low");
    }

    #[test]
    fn test_random_forest_averages_normalised_votes() {
        // Second tree always leans Low with 0.8/0.2 weights
        let lean_low = json!({
            "children_left": [-1],
            "children_right": [-1],
            "feature": [-2],
            "threshold": [-2.0],
            "value": [[40.0, 10.0]]
        });
        let forest = model("random_forest", vec![stump(), lean_low.clone(), lean_low]);
        forest.validate().unwrap();

        // High tree gives [0, 1]; two Low-leaning trees give [0.8, 0.2] each
        let proba = forest.predict_proba(&[3.0, 0.0]).unwrap();
        assert!((proba[0] - 1.6 / 3.0).abs() < 1e-9);
        assert!((proba[1] - 1.4 / 3.0).abs() < 1e-9);
        assert_eq!(forest.predict(&[3.0, 0.0]).unwrap(), "Low");
    }

    #[test]
    fn test_tie_resolves_to_first_class() {
        let even = json!({
            "children_left": [-1],
            "children_right": [-1],
            "feature": [-2],
            "threshold": [-2.0],
            "value": [[1.0, 1.0]]
        });
        let tree = model("decision_tree", vec![even]);

        assert_eq!(tree.predict(&[0.0, 0.0]).unwrap(), "Low");
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let tree = model("decision_tree", vec![stump()]);

        let err = tree.predict(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_feature() {
        let mut bad = stump();
        bad["feature"] = json!([7, -2, -2]);

        let err = model("decision_tree", vec![bad]).validate().unwrap_err();
        assert!(err.contains("feature 7"));
    }

    #[test]
    fn test_validate_rejects_backward_child() {
        let mut bad = stump();
        bad["children_left"] = json!([0, -1, -1]);

        let err = model("decision_tree", vec![bad]).validate().unwrap_err();
        assert!(err.contains("invalid child index"));
    }

    #[test]
    fn test_validate_rejects_class_width_mismatch() {
        let mut bad = stump();
        bad["value"] = json!([[5.0, 5.0, 0.0], [5.0, 0.0, 0.0], [0.0, 5.0, 0.0]]);

        let err = model("decision_tree", vec![bad]).validate().unwrap_err();
        assert!(err.contains("class weights"));
    }

    #[test]
    fn test_validate_rejects_multi_tree_decision_tree() {
        let err = model("decision_tree", vec![stump(), stump()])
            .validate()
            .unwrap_err();
        assert!(err.contains("2 trees"));
    }
}
