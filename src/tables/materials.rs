/// Plant material key → full material name used in specification strings.
pub static MATERIALS: &[(&str, &str)] = &[
    ("SS", "Stainless Steel"),
    ("CS", "Carbon Steel"),
    ("Alloy", "Alloy Steel"),
    ("PVC", "PVC"),
    ("HDPE", "HDPE"),
];

/// Material key → piping spec codes that imply it (matched case-insensitively
/// against the `MaterialCode` column).
pub static MATERIAL_CODES: &[(&str, &[&str])] = &[
    ("SS", &["A312", "A358", "A182", "A403", "304L", "316L"]),
    ("CS", &["A106", "A53", "A105", "A234", "A672", "API 5L"]),
    ("Alloy", &["A335", "A234 WP11", "P11", "P22", "P91"]),
    ("PVC", &["D1785", "D2466", "C900"]),
    ("HDPE", &["PE4710", "PE100", "F714"]),
];

/// `ItemMaterial` column value → material key.
pub static ITEM_MATERIALS: &[(&str, &str)] = &[
    ("Stainless Steel", "SS"),
    ("Stainless steel", "SS"),
    ("Carbon Steel", "CS"),
    ("Carbon steel", "CS"),
    ("Steel", "CS"),
    ("Alloy Steel", "Alloy"),
    ("Chrome-Moly", "Alloy"),
    ("Polyvinyl Chloride", "PVC"),
    ("PVC", "PVC"),
    ("High Density Polyethylene", "HDPE"),
    ("Polyethylene", "HDPE"),
];
