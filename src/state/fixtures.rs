//! Shared test payloads

use serde_json::{json, Value};

/// PNG signature followed by the start of an IHDR chunk
pub const PNG_HEADER: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// Two questions, each with two steps and two knowledge points
pub fn solution_json() -> Value {
    json!({
        "questions": [
            {
                "steps": [
                    { "content": "设小明有 x 个苹果" },
                    { "content": "x + 3 = 7, 所以 x = 4" }
                ],
                "knowledge": [
                    { "category": "方程", "content": "一元一次方程", "importance": "HIGH" },
                    { "category": "应用题", "content": "设未知数", "importance": "MEDIUM" }
                ]
            },
            {
                "steps": [
                    { "content": "面积 = 长 × 宽" },
                    { "content": "4 × 5 = 20" }
                ],
                "knowledge": [
                    { "category": "几何", "content": "长方形面积", "importance": "HIGH" },
                    { "category": "算术", "content": "乘法", "importance": "LOW" }
                ]
            }
        ],
        "other_error": null
    })
}

/// Check-shaped counterpart of [`solution_json`]
pub fn check_json() -> Value {
    json!({
        "questions": [
            {
                "steps": [
                    { "content": "3 + 4 = 8", "is_error": true },
                    { "content": "8 - 1 = 7", "is_error": false }
                ],
                "knowledge": [
                    { "category": "算术", "content": "加法" },
                    { "category": "算术", "content": "减法" }
                ]
            },
            {
                "steps": [
                    { "content": "2 × 6 = 12", "is_error": false },
                    { "content": "12 ÷ 4 = 3", "is_error": false }
                ],
                "knowledge": [
                    { "category": "算术", "content": "乘法" },
                    { "category": "算术", "content": "除法" }
                ]
            }
        ],
        "other_error": null
    })
}
