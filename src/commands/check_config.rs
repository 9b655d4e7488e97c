use anyhow::{Context, Result};

use crate::config::MenuConfig;

/// One line per menu: name, hotkey, and item counts.
pub fn summarize(cfg: &MenuConfig) -> Result<Vec<String>> {
    cfg.theme().context("theme")?;
    let menus = cfg.menus().context("menus")?;
    Ok(menus
        .iter()
        .map(|(entry, items)| {
            let selectable = items.iter().filter(|i| i.is_selectable()).count();
            let hotkey = entry.hotkey.map_or_else(|| "-".to_string(), |c| c.to_string());
            let state = if entry.enabled { "" } else { " (disabled)" };
            format!(
                "{:<12} [{hotkey}] {:>2} items, {selectable} selectable{state}",
                entry.name,
                items.len()
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_builtin_menus() {
        let lines = summarize(&MenuConfig::default()).expect("valid");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "File         [i]  7 items, 5 selectable");
    }
}
