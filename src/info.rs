use crate::content::escape_text;
use chrono::{DateTime, Local, Offset, TimeZone};
use std::io::Write;

/// General document metatdata such as title, author, etc
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document. No prescribed format, though Adobe Acrobat suggests
    /// using a comma separated list of keywords
    pub keywords: Option<String>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Renders the info dictionary body. Strings go through the same
    /// printable-ASCII escaping as page text.
    pub(crate) fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        self.render_at(Local::now())
    }

    #[allow(clippy::write_with_newline)]
    fn render_at<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Result<Vec<u8>, std::io::Error> {
        let mut dict: Vec<u8> = Vec::default();
        write!(&mut dict, "<<\n")?;

        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                write!(&mut dict, "/{key} ({})\n", escape_text(value))?;
            }
        }

        write!(
            &mut dict,
            "/Creator ({} v{})\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        write!(&mut dict, "/CreationDate ({})\n", pdf_date(&now))?;
        write!(&mut dict, ">>\n")?;
        Ok(dict)
    }
}

/// Formats a timestamp as a PDF date string, e.g. `D:20240131235959+01'00'`
fn pdf_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let offset = date.offset().fix().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let offset_hours = offset.abs() / (60 * 60);
    let offset_minutes = (offset.abs() % (60 * 60)) / 60;
    format!(
        "D:{}{sign}{offset_hours:02}'{offset_minutes:02}'",
        date.naive_local().format("%Y%m%d%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_dates_with_offset() {
        let tz = FixedOffset::west_opt(5 * 3600 + 30 * 60).expect("valid offset");
        let date = tz
            .with_ymd_and_hms(2024, 1, 31, 23, 59, 58)
            .single()
            .expect("valid date");
        assert_eq!(pdf_date(&date), "D:20240131235958-05'30'");

        let utc = FixedOffset::east_opt(0).expect("valid offset");
        let date = utc
            .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(pdf_date(&date), "D:20240601080000+00'00'");
    }

    #[test]
    fn renders_only_present_entries() {
        let mut info = Info::new();
        info.title("Notes (draft)").author("M\u{fc}ller");
        let tz = FixedOffset::east_opt(3600).expect("valid offset");
        let date = tz
            .with_ymd_and_hms(2024, 2, 3, 4, 5, 6)
            .single()
            .expect("valid date");
        let dict = String::from_utf8(info.render_at(date).expect("renders")).expect("ascii");

        assert!(dict.contains("/Title (Notes \\(draft\\))\n"));
        assert!(dict.contains("/Author (Mller)\n"));
        assert!(!dict.contains("/Subject"));
        assert!(!dict.contains("/Keywords"));
        assert!(dict.contains("/Creator (pdf-export v"));
        assert!(dict.contains("/CreationDate (D:20240203040506+01'00')\n"));
    }
}
