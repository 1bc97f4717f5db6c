//! Byte-size estimation from type spellings.
//!
//! The JSON AST dump carries no record layout, so class sizes are estimated
//! from field type spellings against an LP64 builtin table. Anything the
//! table cannot resolve yields `None`, which the store records as the
//! non-positive "unknown/incomplete" sentinel.

/// Size and alignment of one type, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLayout {
    pub size: u64,
    pub align: u64,
}

impl TypeLayout {
    const fn new(size: u64, align: u64) -> Self {
        Self { size, align }
    }
}

/// Look up the layout of a builtin type by its spelling.
///
/// Strips `const`/`volatile`/tag-keyword qualifiers, resolves pointers and
/// references to the word size, and scales array spellings like `int[2][3]`.
pub fn builtin_layout(spelling: &str) -> Option<TypeLayout> {
    let mut s = spelling.trim();
    if s.is_empty() {
        return None;
    }

    loop {
        let before = s;
        for prefix in ["const ", "volatile ", "struct ", "class ", "enum "] {
            if let Some(rest) = before.strip_prefix(prefix) {
                s = rest.trim_start();
                break;
            }
        }
        if before == s {
            break;
        }
    }

    if s.ends_with('*') || s.ends_with('&') {
        return Some(TypeLayout::new(8, 8));
    }

    if let Some(open) = s.find('[') {
        let elem = builtin_layout(s[..open].trim_end())?;
        let count = array_element_count(&s[open..])?;
        return Some(TypeLayout::new(elem.size.checked_mul(count)?, elem.align));
    }

    let layout = match s {
        "bool" | "char" | "signed char" | "unsigned char" | "int8_t" | "uint8_t" => TypeLayout::new(1, 1),
        "short" | "short int" | "unsigned short" | "unsigned short int" | "char16_t" | "int16_t" | "uint16_t" => {
            TypeLayout::new(2, 2)
        }
        "int" | "unsigned int" | "float" | "wchar_t" | "char32_t" | "int32_t" | "uint32_t" => TypeLayout::new(4, 4),
        "long" | "long int" | "unsigned long" | "unsigned long int" | "long long" | "long long int"
        | "unsigned long long" | "unsigned long long int" | "double" | "size_t" | "ptrdiff_t" | "intptr_t"
        | "uintptr_t" | "int64_t" | "uint64_t" => TypeLayout::new(8, 8),
        "long double" => TypeLayout::new(16, 16),
        _ => return None,
    };
    Some(layout)
}

/// Total element count of an array suffix like `[2][3]`.
fn array_element_count(suffix: &str) -> Option<u64> {
    let mut count: u64 = 1;
    let mut rest = suffix.trim();
    while let Some(inner) = rest.strip_prefix('[') {
        let close = inner.find(']')?;
        let dim: u64 = inner[..close].trim().parse().ok()?;
        count = count.checked_mul(dim)?;
        rest = inner[close + 1..].trim_start();
    }
    if rest.is_empty() { Some(count) } else { None }
}

/// Estimate the byte size of a record from its field type spellings.
///
/// Standard sequential layout: each field is placed at the next offset
/// aligned to its own alignment, and the final size is padded to the largest
/// alignment. An empty record occupies one byte, as in C++.
pub fn record_size(field_types: &[&str]) -> Option<u64> {
    let mut size: u64 = 0;
    let mut max_align: u64 = 1;
    for spelling in field_types {
        let layout = builtin_layout(spelling)?;
        size = align_up(size, layout.align).checked_add(layout.size)?;
        max_align = max_align.max(layout.align);
    }
    Some(align_up(size, max_align).max(1))
}

fn align_up(value: u64, align: u64) -> u64 {
    value.div_ceil(align) * align
}

#[cfg(test)]
#[path = "../tests/src/layout_tests.rs"]
mod tests;
