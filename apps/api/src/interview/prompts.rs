//! Prompt constants and the question-generation prompt builder.

use crate::models::interview::{InterviewRow, DEFAULT_DURATION_MINUTES};
use crate::models::user::User;

/// Question generation prompt template.
/// Replace: {job_title}, {company_name}, {job_description}, {interview_type},
///          {user_skills}, {user_experience}, {duration}
const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer. Based on the following inputs, generate a well-structured list of high-quality interview questions.

**Job Title**: {job_title}
**Company Name**: {company_name}
**Job Description**: {job_description}
**Interview Type**: {interview_type}
**User Skills**: {user_skills}
**User Experience**: {user_experience} years
**Interview Duration**: {duration} minutes

Generate exactly 8-10 questions covering different aspects:
- 3-4 Technical questions (specific to the role and job description)
- 2-3 Behavioral questions
- 1-2 Experience-based questions
- 1-2 Problem-solving scenarios

Format your response as valid JSON only. Do NOT use markdown code fences. Return a JSON ARRAY:
[
  {
    "question": "string",
    "type": "Technical | Behavioral | Experience | Problem Solving | Leadership"
  }
]"#;

/// Builds the question-generation prompt from the interview and its owner's
/// profile. Pure string construction — no side effects, no failure modes.
///
/// Blank fields are substituted with explicit placeholders ("N/A" / 0) so the
/// prompt is always well-formed.
pub fn build_question_prompt(interview: &InterviewRow, user: &User) -> String {
    let skills = if user.skills.is_empty() {
        "N/A".to_string()
    } else {
        user.skills.join(", ")
    };

    let duration = if interview.duration > 0 {
        interview.duration
    } else {
        DEFAULT_DURATION_MINUTES
    };

    QUESTION_PROMPT_TEMPLATE
        .replace("{job_title}", or_placeholder(&interview.job_title))
        .replace("{company_name}", or_placeholder(&interview.company_name))
        .replace("{job_description}", or_placeholder(&interview.job_description))
        .replace("{interview_type}", or_placeholder(&interview.interview_type))
        .replace("{user_skills}", &skills)
        .replace("{user_experience}", &user.experience.max(0).to_string())
        .replace("{duration}", &duration.to_string())
}

fn or_placeholder(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
