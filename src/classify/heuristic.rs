//! Geometric heuristic classifier
//!
//! The upstream CNN distinguishes eight coarse shape groups; finger-curl
//! and tip-distance rules over the raw landmarks split each group into the
//! final letter. All thresholds are in pixel units of the landmark
//! coordinate space. Image axes point down, so a larger `y` means lower in
//! the frame (a curled finger has its tip below its middle joint).

use super::{Classifier, HandFrame, LANDMARK_COUNT};

/// Thumb-to-index tip distance separating C (open) from O (closed)
const CO_TIP_DISTANCE: f32 = 50.0;

/// Index-to-middle tip distance separating G (spread) from H (together)
const GH_TIP_DISTANCE: f32 = 60.0;

// Landmark indices (MediaPipe hand layout)
const THUMB_TIP: usize = 4;
const INDEX_PIP: usize = 6;
const INDEX_TIP: usize = 8;
const MIDDLE_PIP: usize = 10;
const MIDDLE_TIP: usize = 12;
const RING_PIP: usize = 14;
const RING_TIP: usize = 16;
const PINKY_PIP: usize = 18;
const PINKY_TIP: usize = 20;

/// Rule-based splitter over the model's coarse shape groups
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Create a heuristic classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, frame: &HandFrame) -> Option<char> {
        if frame.landmarks.len() < LANDMARK_COUNT {
            return None;
        }
        let pts = &frame.landmarks;
        let &group = frame.classes.first()?;

        // Fist-like shapes leak into several groups; when index, middle
        // and ring are all curled, remap to the closed-hand group.
        let group = if matches!(group, 1..=6) && all_curled(pts) {
            0
        } else {
            group
        };

        let letter = match group {
            0 => closed_hand_letter(pts),
            1 => extended_hand_letter(pts),
            2 => {
                if dist(pts[INDEX_TIP], pts[THUMB_TIP]) > CO_TIP_DISTANCE {
                    'C'
                } else {
                    'O'
                }
            }
            3 => {
                if dist(pts[INDEX_TIP], pts[MIDDLE_TIP]) > GH_TIP_DISTANCE {
                    'G'
                } else {
                    'H'
                }
            }
            4 => 'L',
            5 => 'P',
            6 => 'X',
            7 => 'Y',
            _ => return None,
        };
        Some(letter)
    }
}

/// Index, middle and ring tips all below their middle joints
fn all_curled(pts: &[[f32; 2]]) -> bool {
    pts[INDEX_TIP][1] > pts[INDEX_PIP][1]
        && pts[MIDDLE_TIP][1] > pts[MIDDLE_PIP][1]
        && pts[RING_TIP][1] > pts[RING_PIP][1]
}

/// Split the closed-hand group into A / E / M / S by thumb position
fn closed_hand_letter(pts: &[[f32; 2]]) -> char {
    let thumb = pts[THUMB_TIP];
    if thumb[0] < pts[INDEX_PIP][0] {
        'A'
    } else if thumb[1] > pts[INDEX_TIP][1] && thumb[1] > pts[MIDDLE_TIP][1] {
        'E'
    } else if thumb[0] > pts[RING_PIP][0] {
        'M'
    } else {
        'S'
    }
}

/// Split the extended-finger group into B / D / I / V
fn extended_hand_letter(pts: &[[f32; 2]]) -> char {
    let index_up = pts[INDEX_TIP][1] < pts[INDEX_PIP][1];
    let middle_up = pts[MIDDLE_TIP][1] < pts[MIDDLE_PIP][1];
    let ring_up = pts[RING_TIP][1] < pts[RING_PIP][1];

    if index_up && middle_up && ring_up {
        'B'
    } else if index_up && !middle_up {
        'D'
    } else if !index_up && pts[PINKY_PIP][1] < pts[PINKY_TIP][1] {
        'I'
    } else {
        'V'
    }
}

/// Euclidean distance between two landmarks
fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(classes: &[u8]) -> HandFrame {
        HandFrame {
            landmarks: vec![[0.0, 0.0]; LANDMARK_COUNT],
            classes: classes.to_vec(),
        }
    }

    fn extend_fingers(frame: &mut HandFrame) {
        // Tips above middle joints (smaller y = higher in image)
        for (tip, pip) in [
            (INDEX_TIP, INDEX_PIP),
            (MIDDLE_TIP, MIDDLE_PIP),
            (RING_TIP, RING_PIP),
        ] {
            frame.landmarks[tip] = [0.0, 10.0];
            frame.landmarks[pip] = [0.0, 20.0];
        }
    }

    fn curl_fingers(frame: &mut HandFrame) {
        for (tip, pip) in [
            (INDEX_TIP, INDEX_PIP),
            (MIDDLE_TIP, MIDDLE_PIP),
            (RING_TIP, RING_PIP),
        ] {
            frame.landmarks[tip] = [0.0, 30.0];
            frame.landmarks[pip] = [0.0, 20.0];
        }
    }

    #[test]
    fn short_frame_yields_none() {
        let classifier = HeuristicClassifier::new();
        let frame = HandFrame {
            landmarks: vec![[0.0, 0.0]; 5],
            classes: vec![4],
        };
        assert_eq!(classifier.classify(&frame), None);
    }

    #[test]
    fn unknown_class_yields_none() {
        let classifier = HeuristicClassifier::new();
        let mut f = frame(&[9]);
        extend_fingers(&mut f);
        assert_eq!(classifier.classify(&f), None);
    }

    #[test]
    fn direct_groups_map_straight_to_letters() {
        let classifier = HeuristicClassifier::new();
        let mut f = frame(&[4]);
        extend_fingers(&mut f);
        assert_eq!(classifier.classify(&f), Some('L'));

        f.classes = vec![7];
        assert_eq!(classifier.classify(&f), Some('Y'));
    }

    #[test]
    fn curled_fingers_remap_to_closed_hand() {
        let classifier = HeuristicClassifier::new();
        let mut f = frame(&[4]);
        curl_fingers(&mut f);
        // Thumb tip left of the index middle joint: A
        f.landmarks[THUMB_TIP] = [-10.0, 0.0];
        assert_eq!(classifier.classify(&f), Some('A'));
    }

    #[test]
    fn tip_distance_splits_c_from_o() {
        let classifier = HeuristicClassifier::new();
        let mut f = frame(&[2]);
        extend_fingers(&mut f);

        f.landmarks[THUMB_TIP] = [0.0, 0.0];
        f.landmarks[INDEX_TIP] = [100.0, 10.0];
        assert_eq!(classifier.classify(&f), Some('C'));

        f.landmarks[INDEX_TIP] = [10.0, 10.0];
        assert_eq!(classifier.classify(&f), Some('O'));
    }

    #[test]
    fn extended_group_splits_by_finger_pattern() {
        let classifier = HeuristicClassifier::new();
        let mut f = frame(&[1]);
        extend_fingers(&mut f);
        assert_eq!(classifier.classify(&f), Some('B'));

        // Index up, middle down: D
        f.landmarks[MIDDLE_TIP] = [0.0, 30.0];
        // Keep ring raised so the closed-hand remap stays off
        assert_eq!(classifier.classify(&f), Some('D'));
    }
}
