/// Number of sign classes the classifier distinguishes.
pub const CLASS_COUNT: usize = 43;

/// Fixed mapping from class index to sign name.
///
/// Table keys are 1-based while the model's output indices are 0-based, so
/// callers looking up a raw prediction must add 1 to the predicted index.
#[derive(Debug, Clone)]
pub struct LabelTable {
    names: [&'static str; CLASS_COUNT],
}

const SIGN_NAMES: [&str; CLASS_COUNT] = [
    "Speed limit (20km/h)",
    "Speed limit (30km/h)",
    "Speed limit (50km/h)",
    "Speed limit (60km/h)",
    "Speed limit (70km/h)",
    "Speed limit (80km/h)",
    "End of speed limit (80km/h)",
    "Speed limit (100km/h)",
    "Speed limit (120km/h)",
    "No passing",
    "No passing veh over 3.5 tons",
    "Right-of-way at intersection",
    "Priority road",
    "Yield",
    "Stop",
    "No vehicles",
    "Veh > 3.5 tons prohibited",
    "No entry",
    "General caution",
    "Dangerous curve left",
    "Dangerous curve right",
    "Double curve",
    "Bumpy road",
    "Slippery road",
    "Road narrows on the right",
    "Road work",
    "Traffic signals",
    "Pedestrians",
    "Children crossing",
    "Bicycles crossing",
    "Beware of ice/snow",
    "Wild animals crossing",
    "End speed + passing limits",
    "Turn right ahead",
    "Turn left ahead",
    "Ahead only",
    "Go straight or right",
    "Go straight or left",
    "Keep right",
    "Keep left",
    "Roundabout mandatory",
    "End of no passing",
    "End no passing veh > 3.5 tons",
];

impl LabelTable {
    pub fn new() -> Self {
        Self { names: SIGN_NAMES }
    }

    /// Look up a 1-based class index. Returns None outside 1..=CLASS_COUNT.
    pub fn get(&self, class_index: usize) -> Option<&'static str> {
        if (1..=CLASS_COUNT).contains(&class_index) {
            Some(self.names[class_index - 1])
        } else {
            None
        }
    }

    #[allow(dead_code)]
    pub fn contains(&self, label: &str) -> bool {
        self.names.iter().any(|name| *name == label)
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_a_name() {
        let labels = LabelTable::new();

        for class_index in 1..=CLASS_COUNT {
            let name = labels.get(class_index);
            assert!(name.is_some());
            assert!(!name.unwrap().is_empty());
        }
    }

    #[test]
    fn test_out_of_range_indices_are_undefined() {
        let labels = LabelTable::new();

        assert_eq!(labels.get(0), None);
        assert_eq!(labels.get(CLASS_COUNT + 1), None);
    }

    #[test]
    fn test_known_entries() {
        let labels = LabelTable::new();

        assert_eq!(labels.get(1), Some("Speed limit (20km/h)"));
        assert_eq!(labels.get(15), Some("Stop"));
        assert_eq!(labels.get(43), Some("End no passing veh > 3.5 tons"));
    }

    #[test]
    fn test_contains() {
        let labels = LabelTable::new();

        assert!(labels.contains("Yield"));
        assert!(!labels.contains("Not a sign"));
    }
}
