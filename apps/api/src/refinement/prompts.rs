// All LLM prompt constants for the Refinement module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::json;

use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, ID_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::models::resume::{Category, ResumeRecord};
use crate::refinement::schema::response_schema;

/// System prompt for resume refinement.
pub const REFINE_SYSTEM: &str = "You are a strict, detail-oriented professional resume writer \
    specialising in applicant tracking systems.";

/// Refinement prompt template.
/// Replace: {grounding_instruction}, {id_instruction}, {candidate_type}, {job_json},
///          {candidate_json}, {category_guidance}, {schema_json}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

{id_instruction}

YOUR TASK: Tailor the candidate's resume to the target job description.

CANDIDATE TYPE: {candidate_type}

TARGET JOB:
{job_json}

CANDIDATE INPUT (source of truth):
{candidate_json}

INSTRUCTIONS:
1. SUMMARY: write a 3-4 sentence professional summary that weaves in high-value keywords from the job description.
2. SKILLS: refine the candidate's skills, prioritising tools and hard skills the job description names.
3. BULLETS: for every item under positions, projects and activities, rewrite its description into 3-5 bullets
   following "Action verb + task + result". Quantify only where the input supports it.
{category_guidance}

Return a JSON object matching this schema EXACTLY. Collections absent from the schema must be omitted:
{schema_json}"#;

/// System prompt for cover letters.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer creating compelling, \
    personalised cover letters that get candidates noticed by recruiters and hiring managers. \
    Respond with the letter text only.";

/// Cover letter prompt template.
/// Replace: {job_json}, {candidate_json}, {candidate_type}, {body_guidance}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for this job application.

JOB DETAILS:
{job_json}

CANDIDATE ({candidate_type}):
{candidate_json}

REQUIREMENTS:
- Business letter format: date, "Hiring Manager" as recipient, greeting, body, closing, signature line.
- Opening paragraph: genuine interest in the role and company.
- Body (2-3 paragraphs): {body_guidance}
- Closing: reiterate enthusiasm and request an interview.
- 3-4 paragraphs, one page maximum. Use keywords from the job description naturally.
- Use ONLY facts from the candidate input."#;

const EXPERIENCED_GUIDANCE: &str =
    "Frame the candidate's background as the solution to the needs stated in the job description.";
const ENTRY_LEVEL_GUIDANCE: &str = "The candidate is entry level: emphasise coursework, projects, \
    internships, volunteering and leadership in student organisations.";

fn candidate_type(record: &ResumeRecord) -> &'static str {
    match record.category {
        Some(Category::EntryLevel) => "Student / entry-level candidate",
        _ => "Experienced professional",
    }
}

fn job_json(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&record.target_job)
}

/// Builds the refinement prompt for `record`, embedding its response schema.
pub fn build_refine_prompt(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    let candidate = json!({
        "positions": record.positions.iter().map(|p| json!({
            "id": p.id,
            "role": p.role,
            "company": p.company,
            "description": p.raw_description,
        })).collect::<Vec<_>>(),
        "projects": record.projects.iter().map(|p| json!({
            "id": p.id,
            "name": p.name,
            "technologies": p.technologies,
            "description": p.raw_description,
        })).collect::<Vec<_>>(),
        "activities": record.activities.iter().map(|a| json!({
            "id": a.id,
            "title": a.title,
            "organization": a.organization,
            "description": a.description,
        })).collect::<Vec<_>>(),
        "education": record.education,
        "skills": record.skills,
    });

    let category_guidance = match record.category {
        Some(Category::EntryLevel) => ENTRY_LEVEL_GUIDANCE,
        _ => EXPERIENCED_GUIDANCE,
    };

    Ok(REFINE_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{id_instruction}", ID_INSTRUCTION)
        .replace("{candidate_type}", candidate_type(record))
        .replace("{job_json}", &job_json(record)?)
        .replace("{candidate_json}", &serde_json::to_string_pretty(&candidate)?)
        .replace("{category_guidance}", category_guidance)
        .replace(
            "{schema_json}",
            &serde_json::to_string_pretty(&response_schema(record))?,
        ))
}

/// Full system prompt for refinement calls.
pub fn refine_system() -> String {
    format!("{REFINE_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Builds the cover letter prompt for `record`.
pub fn build_cover_letter_prompt(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    let candidate = json!({
        "name": record.profile.full_name,
        "email": record.profile.email,
        "phone": record.profile.phone,
        "location": record.profile.location,
        "linkedin": record.profile.linkedin,
        "summary": record.summary,
        "positions": record.positions.iter().map(|p| {
            let end = if p.is_current { "Present" } else { p.end_date.as_str() };
            json!({
                "role": p.role,
                "company": p.company,
                "start": p.start_date,
                "end": end,
                "highlights": p.refined_bullets,
            })
        }).collect::<Vec<_>>(),
        "education": record.education,
        "skills": record.skills,
    });

    let body_guidance = match record.category {
        Some(Category::EntryLevel) => ENTRY_LEVEL_GUIDANCE,
        _ => "Highlight the most relevant experience and connect it directly to the job requirements.",
    };

    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_json}", &job_json(record)?)
        .replace("{candidate_type}", candidate_type(record))
        .replace("{candidate_json}", &serde_json::to_string_pretty(&candidate)?)
        .replace("{body_guidance}", body_guidance))
}
