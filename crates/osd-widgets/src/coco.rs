//! COCO class-id → name table and the 8-color per-class detection palette.

use osd_color::Color;

/// The 80 COCO object-detection class names, indexed by `class_id`.
pub const CLASS_NAMES: [&str; 80] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Name for a `class_id`, `"class N"` when out of the documented `0..80` range.
pub fn class_name(class_id: i32) -> String {
    CLASS_NAMES
        .get(class_id as usize)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("class {class_id}"))
}

/// An 8-color cycle indexed by `class_id mod 8`.
pub const PALETTE: [Color; 8] = [
    Color::new(0xFF, 0xE6, 0x19, 0x4B),
    Color::new(0xFF, 0x3C, 0xB4, 0x4B),
    Color::new(0xFF, 0xFF, 0xE1, 0x19),
    Color::new(0xFF, 0x43, 0x63, 0xD8),
    Color::new(0xFF, 0xF5, 0x82, 0x31),
    Color::new(0xFF, 0x91, 0x1E, 0xB4),
    Color::new(0xFF, 0x42, 0xD4, 0xF4),
    Color::new(0xFF, 0xF0, 0x32, 0xE6),
];

/// `palette[class_id mod 8]`, never out of bounds.
pub fn palette_color(class_id: i32) -> Color {
    let idx = class_id.rem_euclid(8) as usize;
    PALETTE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_in_range() {
        assert_eq!(class_name(0), "person");
        assert_eq!(class_name(79), "toothbrush");
    }

    #[test]
    fn class_name_out_of_range_falls_back() {
        assert_eq!(class_name(200), "class 200");
    }

    #[test]
    fn palette_color_wraps_modulo_eight() {
        assert_eq!(palette_color(0), palette_color(8));
    }
}
