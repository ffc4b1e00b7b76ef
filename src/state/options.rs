//! Select options for the crop and region dropdowns.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Crops offered in the crop dropdowns.
pub const CROPS: &[&str] = &[
    "Rice",
    "Wheat",
    "Maize",
    "Cotton",
    "Sugarcane",
    "Soybean",
    "Groundnut",
    "Mustard",
    "Tomato",
    "Onion",
    "Potato",
    "Chilli",
    "Banana",
    "Mango",
];

/// States and union territories offered in the region dropdown.
pub const REGIONS: &[&str] = &[
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];
