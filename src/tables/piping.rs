//! Account codes keyed by the classifier's specification string.
//!
//! Only fully specified pipe (material known, and a size range for large
//! bore) carries an account code; the generic descriptions have none.

pub static PIPING_ACCOUNTS: &[(&str, &str)] = &[
    // above ground, small bore
    ("Above Ground Small Bore Pipe (All-In) (Stainless Steel)", "72.06.02.001"),
    ("Above Ground Small Bore Pipe (All-In) (Carbon Steel)", "72.06.02.002"),
    ("Above Ground Small Bore Pipe (All-In) (Alloy Steel)", "72.06.02.003"),
    ("Above Ground Small Bore Pipe (All-In) (PVC)", "72.06.02.004"),
    ("Above Ground Small Bore Pipe (All-In) (HDPE)", "72.06.02.005"),
    // above ground, large bore
    ("Above Ground Large Bore Pipe (Stainless Steel) (2.5\"-6\" Diameter)", "72.06.04.001.01"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (8\"-12\" Diameter)", "72.06.04.001.02"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (14\"-24\" Diameter)", "72.06.04.001.03"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (26\"-40\" Diameter)", "72.06.04.001.04"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (42\"-54\" Diameter)", "72.06.04.001.05"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (60\"-72\" Diameter)", "72.06.04.001.06"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (74\"-90\" Diameter)", "72.06.04.001.07"),
    ("Above Ground Large Bore Pipe (Stainless Steel) (>90\" Diameter)", "72.06.04.001.08"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (2.5\"-6\" Diameter)", "72.06.04.002.01"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (8\"-12\" Diameter)", "72.06.04.002.02"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (14\"-24\" Diameter)", "72.06.04.002.03"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (26\"-40\" Diameter)", "72.06.04.002.04"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (42\"-54\" Diameter)", "72.06.04.002.05"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (60\"-72\" Diameter)", "72.06.04.002.06"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (74\"-90\" Diameter)", "72.06.04.002.07"),
    ("Above Ground Large Bore Pipe (Carbon Steel) (>90\" Diameter)", "72.06.04.002.08"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (2.5\"-6\" Diameter)", "72.06.04.003.01"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (8\"-12\" Diameter)", "72.06.04.003.02"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (14\"-24\" Diameter)", "72.06.04.003.03"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (26\"-40\" Diameter)", "72.06.04.003.04"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (42\"-54\" Diameter)", "72.06.04.003.05"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (60\"-72\" Diameter)", "72.06.04.003.06"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (74\"-90\" Diameter)", "72.06.04.003.07"),
    ("Above Ground Large Bore Pipe (Alloy Steel) (>90\" Diameter)", "72.06.04.003.08"),
    ("Above Ground Large Bore Pipe (PVC) (2.5\"-6\" Diameter)", "72.06.04.004.01"),
    ("Above Ground Large Bore Pipe (PVC) (8\"-12\" Diameter)", "72.06.04.004.02"),
    ("Above Ground Large Bore Pipe (PVC) (14\"-24\" Diameter)", "72.06.04.004.03"),
    ("Above Ground Large Bore Pipe (PVC) (26\"-40\" Diameter)", "72.06.04.004.04"),
    ("Above Ground Large Bore Pipe (PVC) (42\"-54\" Diameter)", "72.06.04.004.05"),
    ("Above Ground Large Bore Pipe (PVC) (60\"-72\" Diameter)", "72.06.04.004.06"),
    ("Above Ground Large Bore Pipe (PVC) (74\"-90\" Diameter)", "72.06.04.004.07"),
    ("Above Ground Large Bore Pipe (PVC) (>90\" Diameter)", "72.06.04.004.08"),
    ("Above Ground Large Bore Pipe (HDPE) (2.5\"-6\" Diameter)", "72.06.04.005.01"),
    ("Above Ground Large Bore Pipe (HDPE) (8\"-12\" Diameter)", "72.06.04.005.02"),
    ("Above Ground Large Bore Pipe (HDPE) (14\"-24\" Diameter)", "72.06.04.005.03"),
    ("Above Ground Large Bore Pipe (HDPE) (26\"-40\" Diameter)", "72.06.04.005.04"),
    ("Above Ground Large Bore Pipe (HDPE) (42\"-54\" Diameter)", "72.06.04.005.05"),
    ("Above Ground Large Bore Pipe (HDPE) (60\"-72\" Diameter)", "72.06.04.005.06"),
    ("Above Ground Large Bore Pipe (HDPE) (74\"-90\" Diameter)", "72.06.04.005.07"),
    ("Above Ground Large Bore Pipe (HDPE) (>90\" Diameter)", "72.06.04.005.08"),
    // underground, small bore
    ("Underground Small Bore Pipe - Stainless Steel", "72.09.02.001"),
    ("Underground Small Bore Pipe - Carbon Steel", "72.09.02.002"),
    ("Underground Small Bore Pipe - Alloy Steel", "72.09.02.003"),
    ("Underground Small Bore Pipe - PVC", "72.09.02.004"),
    ("Underground Small Bore Pipe - HDPE", "72.09.02.005"),
    // underground, large bore
    ("Underground Large Bore Pipe (Stainless Steel) (2.5\"-6\" Diameter)", "72.09.04.001.01"),
    ("Underground Large Bore Pipe (Stainless Steel) (8\"-12\" Diameter)", "72.09.04.001.02"),
    ("Underground Large Bore Pipe (Stainless Steel) (14\"-24\" Diameter)", "72.09.04.001.03"),
    ("Underground Large Bore Pipe (Stainless Steel) (26\"-40\" Diameter)", "72.09.04.001.04"),
    ("Underground Large Bore Pipe (Stainless Steel) (42\"-54\" Diameter)", "72.09.04.001.05"),
    ("Underground Large Bore Pipe (Stainless Steel) (60\"-72\" Diameter)", "72.09.04.001.06"),
    ("Underground Large Bore Pipe (Stainless Steel) (74\"-90\" Diameter)", "72.09.04.001.07"),
    ("Underground Large Bore Pipe (Stainless Steel) (>90\" Diameter)", "72.09.04.001.08"),
    ("Underground Large Bore Pipe (Carbon Steel) (2.5\"-6\" Diameter)", "72.09.04.002.01"),
    ("Underground Large Bore Pipe (Carbon Steel) (8\"-12\" Diameter)", "72.09.04.002.02"),
    ("Underground Large Bore Pipe (Carbon Steel) (14\"-24\" Diameter)", "72.09.04.002.03"),
    ("Underground Large Bore Pipe (Carbon Steel) (26\"-40\" Diameter)", "72.09.04.002.04"),
    ("Underground Large Bore Pipe (Carbon Steel) (42\"-54\" Diameter)", "72.09.04.002.05"),
    ("Underground Large Bore Pipe (Carbon Steel) (60\"-72\" Diameter)", "72.09.04.002.06"),
    ("Underground Large Bore Pipe (Carbon Steel) (74\"-90\" Diameter)", "72.09.04.002.07"),
    ("Underground Large Bore Pipe (Carbon Steel) (>90\" Diameter)", "72.09.04.002.08"),
    ("Underground Large Bore Pipe (Alloy Steel) (2.5\"-6\" Diameter)", "72.09.04.003.01"),
    ("Underground Large Bore Pipe (Alloy Steel) (8\"-12\" Diameter)", "72.09.04.003.02"),
    ("Underground Large Bore Pipe (Alloy Steel) (14\"-24\" Diameter)", "72.09.04.003.03"),
    ("Underground Large Bore Pipe (Alloy Steel) (26\"-40\" Diameter)", "72.09.04.003.04"),
    ("Underground Large Bore Pipe (Alloy Steel) (42\"-54\" Diameter)", "72.09.04.003.05"),
    ("Underground Large Bore Pipe (Alloy Steel) (60\"-72\" Diameter)", "72.09.04.003.06"),
    ("Underground Large Bore Pipe (Alloy Steel) (74\"-90\" Diameter)", "72.09.04.003.07"),
    ("Underground Large Bore Pipe (Alloy Steel) (>90\" Diameter)", "72.09.04.003.08"),
    ("Underground Large Bore Pipe (PVC) (2.5\"-6\" Diameter)", "72.09.04.004.01"),
    ("Underground Large Bore Pipe (PVC) (8\"-12\" Diameter)", "72.09.04.004.02"),
    ("Underground Large Bore Pipe (PVC) (14\"-24\" Diameter)", "72.09.04.004.03"),
    ("Underground Large Bore Pipe (PVC) (26\"-40\" Diameter)", "72.09.04.004.04"),
    ("Underground Large Bore Pipe (PVC) (42\"-54\" Diameter)", "72.09.04.004.05"),
    ("Underground Large Bore Pipe (PVC) (60\"-72\" Diameter)", "72.09.04.004.06"),
    ("Underground Large Bore Pipe (PVC) (74\"-90\" Diameter)", "72.09.04.004.07"),
    ("Underground Large Bore Pipe (PVC) (>90\" Diameter)", "72.09.04.004.08"),
    ("Underground Large Bore Pipe (HDPE) (2.5\"-6\" Diameter)", "72.09.04.005.01"),
    ("Underground Large Bore Pipe (HDPE) (8\"-12\" Diameter)", "72.09.04.005.02"),
    ("Underground Large Bore Pipe (HDPE) (14\"-24\" Diameter)", "72.09.04.005.03"),
    ("Underground Large Bore Pipe (HDPE) (26\"-40\" Diameter)", "72.09.04.005.04"),
    ("Underground Large Bore Pipe (HDPE) (42\"-54\" Diameter)", "72.09.04.005.05"),
    ("Underground Large Bore Pipe (HDPE) (60\"-72\" Diameter)", "72.09.04.005.06"),
    ("Underground Large Bore Pipe (HDPE) (74\"-90\" Diameter)", "72.09.04.005.07"),
    ("Underground Large Bore Pipe (HDPE) (>90\" Diameter)", "72.09.04.005.08"),
];
