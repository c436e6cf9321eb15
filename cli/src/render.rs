//! Plain-text rendering for terminal output.

use records::{Lead, LeadGroup, SampleTranscript, Toast};

pub fn transcript_rows(transcripts: &[SampleTranscript]) -> String {
    transcripts
        .iter()
        .map(|t| format!("{}  {}  {:<9}  {}", t.id, t.created_at.date(), t.category.as_str(), t.title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn transcript_detail(transcript: &SampleTranscript) -> String {
    let tags = if transcript.tags.is_empty() { "-".to_owned() } else { transcript.tags.join(", ") };
    format!(
        "{}\n{}\ncategory: {}\ntags: {}\n\n{}\n\n{}",
        transcript.title,
        transcript.description,
        transcript.category,
        tags,
        transcript.transcript,
        transcript.character_count_label(),
    )
}

pub fn lead_rows(leads: &[Lead]) -> String {
    leads
        .iter()
        .map(|l| format!("{}  {:<9}  {}  <{}>", l.id, l.lead_type.as_str(), l.name, l.email))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn lead_detail(lead: &Lead) -> String {
    let group = lead.group_id.map_or_else(|| "none".to_owned(), |id| id.to_string());
    format!(
        "id: {}\nname: {}\nemail: {}\ncontact: {}\ndescription: {}\nlead type: {}\ngroup: {}\ncreated: {}",
        lead.id,
        lead.name,
        lead.email,
        lead.contact,
        lead.description.as_deref().unwrap_or("-"),
        lead.lead_type,
        group,
        lead.created_at.date(),
    )
}

pub fn group_rows(groups: &[LeadGroup]) -> String {
    groups
        .iter()
        .map(|g| format!("{}  {}", g.id, g.group_name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn toast_line(toast: &Toast) -> String {
    format!("{}: {}", toast.title, toast.description)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
