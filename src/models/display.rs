//! Human-readable summaries for parsed documents

use std::fmt::Write;

use super::document::{Address, ParsedData};

impl ParsedData {
    pub fn pretty_print(&self) {
        print!("{}", self.summary());
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "ApplicationDocument {{")?;
        if let Some(style) = &self.format_style {
            writeln!(out, "    formatStyle: {style:?},")?;
        }

        writeln!(out, "    applicant: {:?},", self.applicant.name)?;
        writeln!(out, "        {}", address_line(&self.applicant.address))?;
        writeln!(
            out,
            "        {} / {}",
            self.applicant.contact_information.phone, self.applicant.contact_information.email
        )?;

        writeln!(out, "    date: {:?},", self.date)?;

        writeln!(
            out,
            "    recipient: {:?} at {:?},",
            self.recipient.position, self.recipient.company
        )?;
        writeln!(out, "        {}", address_line(&self.recipient.address))?;

        let experiences = &self.letter.experience_section;
        if experiences.is_empty() {
            writeln!(out, "    experience: [],")?;
        } else {
            writeln!(out, "    experience: [")?;
            for exp in experiences {
                let employer = if exp.employer.is_empty() {
                    "(no employer)"
                } else {
                    exp.employer.as_str()
                };
                writeln!(
                    out,
                    "        {employer:?}: {} achievement(s),",
                    exp.achievements.len()
                )?;
            }
            writeln!(out, "    ],")?;
        }

        writeln!(out, "    signature: {:?},", self.letter.signature)?;
        writeln!(out, "}}")?;
        writeln!(out, "{} fields", self.field_count())
    }
}

fn address_line(address: &Address) -> String {
    format!(
        "{}, {}, {} {}",
        address.street, address.city, address.state, address.zip_code
    )
}
