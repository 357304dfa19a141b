use crate::resource::Resource;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Joins resource declarations into one HCL document, one blank line between blocks.
///
/// Blocks keep the order they are supplied in. An empty input renders as an empty string.
pub fn render_config<'a, I>(resources: I) -> String
where
    I: IntoIterator<Item = &'a Resource>,
{
    resources
        .into_iter()
        .map(|r| r.config.as_str())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
