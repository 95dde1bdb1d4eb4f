// All provider prompt constants for career recommendations.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for career generation. `{json_only}` is filled from
/// `llm_client::prompts::JSON_ONLY_INSTRUCTION`.
pub const CAREER_SYSTEM_TEMPLATE: &str = "You are Edu9's expert career counselor specializing \
    in Indian education system. {json_only}";

/// Career recommendation prompt template.
/// Replace: {student_name}, {stream}, {subjects}, {marks}, {interests},
///          {strong_subjects}, {career_goal}, {plain_language}
pub const CAREER_PROMPT_TEMPLATE: &str = r#"You are Edu9's career counselor for Indian students after 12th grade.
Based on the following student profile, recommend the TOP 3 most suitable career paths.

Student Profile:
- Name: {student_name}
- 12th Stream: {stream}
- Subjects Studied: {subjects}
- Marks/Percentage: {marks}%
- Career Interests: {interests}
- Strong Subjects: {strong_subjects}
- Career Goal: {career_goal}

For each career, provide:
1. Career Name
2. Why it's suitable (2-3 sentences, simple language)
3. Required Course/Degree
4. Duration (years)
5. Estimated Cost (in INR)
6. Top Colleges in India
7. Job Prospects (simple explanation)
8. Expected Starting Salary (in INR per annum)
9. Step-by-step roadmap (4-5 steps)

Focus on these career categories: Engineering/IT, Management (BBA/MBA), Medical & Paramedical, Aviation, Abroad Studies

Format your response as JSON array with exactly 3 careers:
[
  {
    "name": "Career Name",
    "suitability": "Why suitable...",
    "course": "B.Tech/MBBS/BBA etc",
    "duration": "4 years",
    "estimated_cost": "₹4-8 Lakhs",
    "top_colleges": ["College 1", "College 2", "College 3"],
    "job_prospects": "Job outlook...",
    "starting_salary": "₹4-6 LPA",
    "roadmap": ["Step 1", "Step 2", "Step 3", "Step 4"]
  }
]

Every field is required. All values are strings except top_colleges and roadmap, which are arrays of strings.

{plain_language}"#;
