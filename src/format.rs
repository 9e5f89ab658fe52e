#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "chrono")]
use chrono::{DateTime, Local, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub heading: bool,
    pub last: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            heading: true,
            last: true,
        }
    }
}

impl Format {
    pub fn heading(self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.heading {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return writeln!(f, "{}", "---Commands---".bold());
        }
        f.write_str("---Commands---\n")
    }

    pub fn key(self, f: &mut fmt::Formatter, name: &str) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", name.yellow().bold());
        }
        f.write_str(name)
    }

    pub fn message(self, f: &mut fmt::Formatter, msg: &str) -> fmt::Result {
        write!(f, ": {}", msg.trim())
    }

    pub fn label(self, f: &mut fmt::Formatter, is_last: bool) -> fmt::Result {
        if !(self.last && is_last) {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}{}{}", "[".yellow(), "LAST".cyan().bold(), "]".yellow());
        }
        f.write_str(" [LAST]")
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        let rfc2822 = timestamp.with_timezone(&Local).to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", rfc2822.yellow());
        }
        write!(f, " ({rfc2822})")
    }

    pub fn end(self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('\n')
    }
}
