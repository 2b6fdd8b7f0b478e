use serde_json::{Value, json};

/// A complete, schema-valid manifest whose asset links live under `base`.
pub fn sample_manifest(base: &str) -> Value {
    json!({
        "name": "Cardputer",
        "maintainer": "Kenji Sato",
        "hostOperatingsystem": ["linux", "macos"],
        "environment": ["esp-idf"],
        "hardware": {
            "chipVendor": "Espressif",
            "manufacturer": "M5Stack",
            "specs": {
                "MCU": "ESP32-S3",
                "RAM": "512KB",
                "Flash": "8MB",
                "Resolution": "240x135",
                "Display Size": "1.14\""
            }
        },
        "description": "Pocket computer with keyboard and display.",
        "shortDescription": "Pocket computer",
        "urlToClone": format!("{}/repo.git", base),
        "logos": [format!("{}/logo.png", base), format!("{}/logo-dark.png", base)],
        "image": format!("{}/board.png", base),
        "branches": ["main"],
        "settings": [
            {
                "type": "dropdown",
                "label": "Display driver",
                "options": [
                    { "name": "ILI9341", "value": "ili9341", "default": "true" },
                    { "name": "ST7789", "value": "st7789" }
                ],
                "actions": [
                    {
                        "ifValue": "st7789",
                        "toReplace": "CONFIG_DISPLAY_ILI9341=y",
                        "newContent": "CONFIG_DISPLAY_ST7789=y",
                        "filePath": "sdkconfig.defaults"
                    }
                ]
            }
        ]
    })
}
