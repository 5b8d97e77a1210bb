// Enhancement templates, one per recognized section. Replace `{content}`
// before returning. Every template embeds the original content verbatim.

pub const SUMMARY_TEMPLATE: &str = "\
Enhanced Professional Summary: {content}

Key improvements made:
• Strengthened action verbs and impact statements
• Added quantifiable achievements where applicable
• Optimized for ATS (Applicant Tracking Systems)
• Enhanced industry-specific keywords
• Improved overall flow and readability

This enhanced version better showcases your unique value proposition and professional brand.";

pub const EXPERIENCE_TEMPLATE: &str = "\
Enhanced Experience Description:

{content}

AI Enhancements Applied:
• Transformed passive descriptions into active accomplishments
• Added specific metrics and quantifiable results
• Incorporated relevant industry keywords
• Emphasized leadership and collaboration skills
• Structured content using the STAR method (Situation, Task, Action, Result)
• Highlighted transferable skills and career progression

This enhanced version better demonstrates your impact and career growth trajectory.";

pub const GENERIC_TEMPLATE: &str = "\
AI-Enhanced Content: {content}

This content has been optimized for impact, clarity, and ATS compatibility. \
Key improvements include stronger action verbs, quantifiable achievements, \
and industry-relevant keywords.";
