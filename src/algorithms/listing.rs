//! Static code listings shown beside a run.
//!
//! Each runner's steps carry a zero-based `line` into one of these tables.
//! The listings are illustrative and never executed.

pub const BUBBLE: &[&str] = &[
    "for i in 0..n - 1 {",
    "    for j in 0..n - i - 1 {",
    "        if a[j] > a[j + 1] {",
    "            a.swap(j, j + 1);",
    "        }",
    "    }",
    "}",
];

pub const INSERTION: &[&str] = &[
    "for i in 1..n {",
    "    let key = a[i];",
    "    let mut j = i;",
    "    while j > 0 && a[j - 1] > key {",
    "        a[j] = a[j - 1];",
    "        j -= 1;",
    "    }",
    "    a[j] = key;",
    "}",
];

pub const SELECTION: &[&str] = &[
    "for i in 0..n {",
    "    let mut min = i;",
    "    for j in i + 1..n {",
    "        if a[j] < a[min] {",
    "            min = j;",
    "        }",
    "    }",
    "    if min != i {",
    "        a.swap(i, min);",
    "    }",
    "}",
];

pub const LINEAR: &[&str] = &[
    "fn linear_search(a: &[i64], target: i64) -> Option<usize> {",
    "    for i in 0..a.len() {",
    "        if a[i] == target {",
    "            return Some(i);",
    "        }",
    "    }",
    "    None",
    "}",
];

pub const BINARY: &[&str] = &[
    "fn binary_search(a: &[i64], target: i64) -> Option<usize> {",
    "    let (mut left, mut right) = (0, a.len() - 1);",
    "    while left <= right {",
    "        let mid = (left + right) / 2;",
    "        if a[mid] == target {",
    "            return Some(mid);",
    "        } else if a[mid] < target {",
    "            left = mid + 1;",
    "        } else {",
    "            right = mid - 1;",
    "        }",
    "    }",
    "    None",
    "}",
];

pub const JUMP: &[&str] = &[
    "fn jump_search(a: &[i64], target: i64) -> Option<usize> {",
    "    let n = a.len();",
    "    let step = n.isqrt();",
    "    let (mut prev, mut curr) = (0, 0);",
    "    while curr < n && a[curr.min(n - 1)] < target {",
    "        prev = curr;",
    "        curr += step;",
    "    }",
    "    for i in prev..=curr.min(n - 1) {",
    "        if a[i] == target {",
    "            return Some(i);",
    "        }",
    "    }",
    "    None",
    "}",
];
