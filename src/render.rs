// src/render.rs
//! Plain-text rendering of job views and listing cards for the terminal

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::countdown::{format_deadline_date, TimeLeft};
use crate::listing::JobCard;
use crate::types::{CompanyRecord, JobRecord, SalaryRange};
use crate::view::{ViewModel, ViewStatus};

/// "$50,000 - $80,000"; unknown bounds render as "?".
pub fn format_salary(range: Option<&SalaryRange>) -> String {
    let bound = |value: Option<u64>| match value {
        Some(v) => format!("${}", group_thousands(v)),
        None => "?".to_string(),
    };

    match range {
        Some(SalaryRange { min: None, max: None }) | None => "Not disclosed".to_string(),
        Some(range) => format!("{} - {}", bound(range.min), bound(range.max)),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Recommendation countdowns are computed against `now`.
pub fn render_view(vm: &ViewModel, now: DateTime<Utc>) -> String {
    match &vm.status {
        ViewStatus::Loading => "Loading job details...\n".to_string(),
        ViewStatus::Error { message, recovery } => {
            format!("Error\n{}\nBack to Jobs: {}\n", message, recovery)
        }
        ViewStatus::Ready => match &vm.job {
            Some(job) => render_ready(vm, job, now),
            None => "Loading job details...\n".to_string(),
        },
    }
}

fn render_ready(vm: &ViewModel, job: &JobRecord, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", job.title);
    let byline = match (&vm.company, job.is_native()) {
        (Some(company), true) => company.name.clone(),
        (_, false) => "External Job".to_string(),
        (None, true) => String::new(),
    };
    let _ = writeln!(
        out,
        "{} | {} | {}",
        byline,
        job.work_location.as_deref().unwrap_or("Location not specified"),
        if job.remote { "Remote" } else { "On-site" }
    );
    let _ = writeln!(out, "Logo: {}", vm.header_logo());
    if let Some(left) = vm.time_left {
        let _ = writeln!(out, "Application closes in: {}", left);
    }
    let _ = writeln!(
        out,
        "[{}]",
        if job.is_native() {
            "Apply Now"
        } else {
            "Apply on Company Site"
        }
    );
    out.push('\n');

    let _ = writeln!(out, "Job Type: {}", job.employment_type.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Experience: {}", job.experience_level.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Salary Range: {}", format_salary(job.salary_range.as_ref()));
    let _ = writeln!(out, "Deadline: {}", format_deadline_date(job.application_deadline));

    section(&mut out, "Job Description", &job.description);
    list_section(&mut out, "Responsibilities", &job.job_responsibilities);
    list_section(&mut out, "Requirements", &job.requirements);
    if !job.languages_required.is_empty() {
        section(&mut out, "Required Languages", &job.languages_required.join(", "));
    }
    if !job.keywords.is_empty() {
        section(&mut out, "Keywords", &job.keywords.join(", "));
    }
    if !job.shift.is_empty() {
        section(&mut out, "Work Schedule", &job.shift.join(", "));
    }
    if let Some(culture) = &job.company_culture {
        section(&mut out, "Company Culture", culture);
    }

    if let (Some(company), true) = (&vm.company, job.is_native()) {
        render_company(&mut out, company);
    }

    out.push_str("\nSimilar Jobs\n");
    if vm.recommendations.is_empty() {
        out.push_str("No similar jobs found at the moment.\n");
    }
    for entry in &vm.recommendations {
        let _ = writeln!(out, "- {} ({})", entry.job.title, entry.logo());
        if let Some(name) = &entry.company_name {
            let _ = writeln!(out, "  {}", name);
        }
        let _ = writeln!(
            out,
            "  {} | {}",
            entry.job.work_location.as_deref().unwrap_or("-"),
            format_salary(entry.job.salary_range.as_ref())
        );
        let _ = writeln!(
            out,
            "  Closes in: {}",
            TimeLeft::until(entry.job.application_deadline, now)
        );
        let _ = writeln!(out, "  View Job: {}", entry.route());
    }

    out
}

fn section(out: &mut String, heading: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    let _ = write!(out, "\n{}\n{}\n", heading, body);
}

fn list_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "\n{}\n", heading);
    for item in items {
        let _ = writeln!(out, "  * {}", item);
    }
}

fn render_company(out: &mut String, company: &CompanyRecord) {
    let _ = write!(out, "\nAbout the Company\n{}", company.name);
    if let Some(industry) = &company.industry {
        let _ = write!(out, " ({})", industry);
    }
    out.push('\n');

    if let Some(description) = &company.description {
        let _ = writeln!(out, "{}", description);
    }
    if let Some(location) = &company.location {
        let _ = writeln!(out, "Location: {}", location);
    }
    if let Some(year) = company.established_year {
        let _ = writeln!(out, "Est. {}", year);
    }
    if let Some(count) = company.employees_count {
        let _ = writeln!(out, "{} employees", count);
    }
    if let Some(website) = &company.contact.website {
        let _ = writeln!(out, "Website: {}", website);
    }
    if let Some(email) = &company.contact.email {
        let _ = writeln!(out, "Email: {}", email);
    }
    if let Some(phone) = &company.contact.phone {
        let _ = writeln!(out, "Phone: {}", phone);
    }
    if let Some(links) = &company.social_media_links {
        for (platform, link) in links.present() {
            let _ = writeln!(out, "{}: {}", platform, link);
        }
    }
}

pub fn render_cards(cards: &[JobCard]) -> String {
    if cards.is_empty() {
        return "No jobs listed.\n".to_string();
    }

    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(
            out,
            "  {} | {} | {}",
            if card.company_name.is_empty() { "-" } else { card.company_name.as_str() },
            if card.work_location.is_empty() { "-" } else { card.work_location.as_str() },
            if card.employment_type.is_empty() { "-" } else { card.employment_type.as_str() }
        );
        let _ = writeln!(out, "  View Job: {}", card.route());
    }
    out
}
