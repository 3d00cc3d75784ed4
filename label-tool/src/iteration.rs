use crate::common::*;

/// Picks the next `Iteration <n>` name given the names already in use.
///
/// Names that do not carry a parseable number after the `Iteration` prefix
/// are ignored; with no usable name the sequence starts at 1.
pub fn next_iteration_name<S>(names: &[S]) -> String
where
    S: AsRef<str>,
{
    let max = names
        .iter()
        .filter_map(|name| parse_iteration_number(name.as_ref()))
        .max()
        .unwrap_or(0);
    format!("Iteration {}", max + 1)
}

fn parse_iteration_number(name: &str) -> Option<u64> {
    let rest = name.strip_prefix("Iteration")?;
    rest.trim().parse().ok()
}

/// Loads a JSON array of iteration names.
pub fn load_iteration_names(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let names = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a JSON array of names", path.display()))?;
    Ok(names)
}
