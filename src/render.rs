use crate::duration::format_duration;
use crate::playlist::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Md,
    Csv,
}

pub fn render(items: &[Item], format: OutputFormat) -> String {
    match format {
        OutputFormat::Md => render_markdown(items),
        OutputFormat::Csv => render_csv(items),
    }
}

/// Two-column table. Rows without a url (the total) get a bare title.
pub fn render_markdown(items: &[Item]) -> String {
    let mut table = String::from("| Title | Duration |\n| :--- | :---: |\n");

    for item in items {
        let duration = format_duration(item.duration);
        let row = if item.url.is_empty() {
            format!("| {} | {} |\n", item.title, duration)
        } else {
            format!("| [{}]({}) | {} |\n", item.title, item.url, duration)
        };
        table.push_str(&row);
    }

    table
}

// Only the title is quoted; embedded quotes and commas pass through as-is.
pub fn render_csv(items: &[Item]) -> String {
    let mut out = String::from("title,url,duration\n");

    for item in items {
        out.push_str(&format!(
            "\"{}\",{},{}\n",
            item.title,
            item.url,
            format_duration(item.duration)
        ));
    }

    out
}
