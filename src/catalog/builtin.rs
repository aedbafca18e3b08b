//! Compiled-in phone inventory

use crate::catalog::Product;

/// The default catalog, in display order
pub fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            "Nova X1",
            799,
            "Flagship with a bright 120 Hz display and an all-day battery.",
        )
        .with_spec("display", "6.7\" OLED, 120 Hz")
        .with_spec("storage_gb", 256)
        .with_spec("ram_gb", 12)
        .with_spec("camera_mp", 50)
        .with_spec("battery_mah", 5000),
        Product::new(
            "Nova X1 Mini",
            649,
            "The X1 camera system in a pocketable body.",
        )
        .with_spec("display", "5.9\" OLED, 120 Hz")
        .with_spec("storage_gb", 128)
        .with_spec("ram_gb", 8)
        .with_spec("camera_mp", 50)
        .with_spec("battery_mah", 4200),
        Product::new(
            "Pulse 5",
            399,
            "Mid-range phone with stereo speakers and fast charging.",
        )
        .with_spec("display", "6.5\" LCD, 90 Hz")
        .with_spec("storage_gb", 128)
        .with_spec("ram_gb", 6)
        .with_spec("camera_mp", 48)
        .with_spec("battery_mah", 5000),
        Product::new(
            "Pulse 5 Lite",
            249,
            "Affordable everyday phone with a large battery.",
        )
        .with_spec("display", "6.5\" LCD, 60 Hz")
        .with_spec("storage_gb", 64)
        .with_spec("ram_gb", 4)
        .with_spec("camera_mp", 13)
        .with_spec("battery_mah", 6000),
        Product::new(
            "Fold Aero",
            1799,
            "Book-style foldable that opens into a small tablet.",
        )
        .with_spec("display", "7.6\" foldable OLED + 6.2\" cover")
        .with_spec("storage_gb", 512)
        .with_spec("ram_gb", 12)
        .with_spec("camera_mp", 50)
        .with_spec("battery_mah", 4400),
        Product::new(
            "Rugged R3",
            529,
            "IP69-rated phone for building sites and hiking trails.",
        )
        .with_spec("display", "6.1\" LCD, Gorilla Glass Victus")
        .with_spec("storage_gb", 128)
        .with_spec("ram_gb", 8)
        .with_spec("camera_mp", 64)
        .with_spec("battery_mah", 8000),
    ]
}
