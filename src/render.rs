//! Response formatting
//!
//! Pure functions from advisor records and caller text to the markdown blocks
//! returned by every transport. Same input, same bytes.

use crate::registry::AdvisorRegistry;
use crate::types::Advisor;

/// Fixed dialogue for the board meeting: (name, focus, quote)
pub const BOARD_VOICES: [(&str, &str, &str); 6] = [
    (
        "Tim Cook",
        "Operations",
        "We need to think about scalability and operational efficiency. How does this decision impact your core processes and values? What systems will you need to support this long-term?",
    ),
    (
        "Warren Buffett",
        "Strategy",
        "Let's focus on the fundamentals. Does this make your business stronger or weaker? Can you explain the value creation in simple terms? Would you be comfortable with this decision for the next 10 years?",
    ),
    (
        "Maya Angelou",
        "Leadership",
        "What story does this decision tell about your leadership? How will this impact the people who depend on you? Are you making this choice from a place of authenticity and care?",
    ),
    (
        "Jamie Dimon",
        "Risk Management",
        "What could go wrong here? What's your downside scenario and are you prepared for it? Show me your risk management framework and capital requirements.",
    ),
    (
        "Charlie Munger",
        "Decision Framework",
        "Let's invert this problem. Why might this fail? What cognitive biases might be affecting your thinking? Are you considering second and third-order effects?",
    ),
    (
        "Art Gensler",
        "Culture & Design",
        "How will this affect the human experience for your customers and employees? What would the ideal outcome look like from a people perspective? How do you design for positive culture and experience?",
    ),
];

/// Roster with one `• name - role` line per advisor
pub fn render_advisor_list(registry: &AdvisorRegistry) -> String {
    let lines: Vec<String> = registry
        .all()
        .iter()
        .map(|a| format!("• {} - {}", a.name, a.role))
        .collect();

    format!(
        "Your Virtual Advisory Board Members:\n\
         \n\
         {}\n\
         \n\
         Use 'consult_advisor' to get specific advice from any board member.",
        lines.join("\n")
    )
}

pub fn render_philosophy(advisor: &Advisor) -> String {
    format!(
        "📚 **Philosophy & Background: {name}**\n\
         \n\
         **Role:** {role}\n\
         \n\
         **Background & Approach:**\n\
         {background}\n\
         \n\
         **Key Principles:**\n\
         - Focus on long-term value creation over short-term gains\n\
         - Build sustainable competitive advantages\n\
         - Prioritize operational excellence and systematic thinking\n\
         - Consider the human impact of all decisions\n\
         - Maintain strong ethical foundations\n\
         \n\
         ---\n\
         \n\
         Use 'consult_advisor' to get specific advice from {name} on your business situations.",
        name = advisor.name,
        role = advisor.role,
        background = advisor.background,
    )
}

/// Single-advisor session. The advice block is the same for every advisor;
/// only the header, background and attribution change.
pub fn render_consultation(advisor: &Advisor, situation: &str, context: &str) -> String {
    let mut response = format!(
        "🎯 **Advisory Session with {name}**\n\
         \n\
         **Your Situation:** {situation}\n\
         \n\
         **{name}'s Perspective:**\n\
         \n\
         {background}\n\
         \n\
         **My advice for your situation:**\n\
         \n\
         Based on my experience and philosophy, here's how I'd approach this:\n\
         \n\
         **Key Questions to Consider:**\n\
         - What are the fundamental drivers of success here?\n\
         - How does this align with your long-term vision and values?\n\
         - What are the potential risks and how can you mitigate them?\n\
         \n\
         **Strategic Recommendations:**\n\
         1. Focus on the core fundamentals that will drive lasting value\n\
         2. Build systems and processes that can scale sustainably\n\
         3. Consider multiple scenarios and prepare for different outcomes\n\
         4. Don't neglect the human elements - culture and people matter\n\
         5. Measure what matters and track your progress consistently\n\
         \n\
         **Red Flags to Watch:**\n\
         Be wary of decisions driven by short-term pressures rather than sound strategic thinking.\n\
         \n\
         **Next Steps:**\n\
         - Define clear success metrics\n\
         - Identify key assumptions and test them\n\
         - Build in regular review and adjustment processes\n\
         \n\
         ---\n\
         *This advice reflects {name}'s known approach and philosophy.*",
        name = advisor.name,
        situation = situation,
        background = advisor.background,
    );

    if !context.is_empty() {
        response.push_str("\n\n**Additional Context Considered:** ");
        response.push_str(context);
    }

    response
}

/// Board meeting transcript. Topic and background are echoed; the discussion
/// itself is fixed.
pub fn render_board_meeting(topic: &str, background_info: &str) -> String {
    let discussion: Vec<String> = BOARD_VOICES
        .iter()
        .map(|(name, focus, quote)| format!("**{} ({}):** \"{}\"", name, focus, quote))
        .collect();

    format!(
        "📋 **Virtual Advisory Board Meeting**\n\
         \n\
         **Topic:** {topic}\n\
         **Background:** {background_info}\n\
         \n\
         ---\n\
         \n\
         **Board Discussion:**\n\
         \n\
         {discussion}\n\
         \n\
         ---\n\
         \n\
         **Board Consensus:**\n\
         1. Ensure strong operational foundations and systems\n\
         2. Verify the business fundamentals and value creation story\n\
         3. Consider the human and cultural impact\n\
         4. Prepare for multiple scenarios including stress cases\n\
         5. Build in measurement and feedback mechanisms\n\
         \n\
         **Recommended Next Steps:**\n\
         Return with specific implementation details for deeper analysis, or consult individual advisors for specialized expertise.",
        topic = topic,
        background_info = background_info,
        discussion = discussion.join("\n\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tim_cook() -> Advisor {
        AdvisorRegistry::builtin()
            .lookup_by_name_fragment("cook")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_advisor_list_has_one_line_per_advisor() {
        let registry = AdvisorRegistry::builtin();
        let text = render_advisor_list(&registry);

        let entries: Vec<&str> = text.lines().filter(|l| l.starts_with("• ")).collect();
        assert_eq!(entries.len(), 6);
        for (line, advisor) in entries.iter().zip(registry.all()) {
            assert!(line.contains(&advisor.name));
            assert!(line.contains(&advisor.role));
        }
        assert!(text.starts_with("Your Virtual Advisory Board Members:"));
        assert!(text.ends_with("from any board member."));
    }

    #[test]
    fn test_philosophy_embeds_background_and_role() {
        let advisor = tim_cook();
        let text = render_philosophy(&advisor);

        assert!(text.starts_with("📚 **Philosophy & Background: Tim Cook**"));
        assert!(text.contains("**Role:** CEO & Technology Strategy Advisor"));
        assert!(text.contains(&advisor.background));
        assert!(text.contains("**Key Principles:**"));
        assert!(text.ends_with("advice from Tim Cook on your business situations."));
    }

    #[test]
    fn test_consultation_without_context() {
        let advisor = tim_cook();
        let text = render_consultation(&advisor, "should I expand to Europe?", "");

        assert!(text.contains("**Your Situation:** should I expand to Europe?"));
        assert!(text.contains(&advisor.background));
        assert!(!text.contains("Additional Context Considered"));
        assert!(text.ends_with("*This advice reflects Tim Cook's known approach and philosophy.*"));
    }

    #[test]
    fn test_consultation_with_context_appends_section() {
        let advisor = tim_cook();
        let text = render_consultation(&advisor, "should I expand to Europe?", "Series A, 40 staff");

        assert!(text.ends_with("\n\n**Additional Context Considered:** Series A, 40 staff"));
    }

    #[test]
    fn test_consultation_advice_is_same_for_every_advisor() {
        let registry = AdvisorRegistry::builtin();
        let strip = |a: &Advisor| {
            render_consultation(a, "q", "")
                .replace(&a.background, "")
                .replace(&a.name, "")
        };
        let first = strip(&registry.all()[0]);
        for advisor in registry.all() {
            assert_eq!(strip(advisor), first);
        }
    }

    #[test]
    fn test_board_meeting_echoes_inputs_and_quotes_everyone() {
        let text = render_board_meeting("pricing strategy", "SaaS startup");

        assert!(text.contains("**Topic:** pricing strategy"));
        assert!(text.contains("**Background:** SaaS startup"));
        for (name, _, quote) in BOARD_VOICES {
            assert!(text.contains(&format!("**{} (", name)), "missing {}", name);
            assert!(text.contains(&format!("\"{}\"", quote)));
        }
        assert!(text.contains("**Board Consensus:**"));
        assert!(text.contains("**Recommended Next Steps:**"));
    }

    #[test]
    fn test_board_voices_match_builtin_roster() {
        let names: Vec<&str> = BOARD_VOICES.iter().map(|(n, _, _)| *n).collect();
        assert_eq!(names, AdvisorRegistry::builtin().names());
    }

    #[test]
    fn test_renders_are_idempotent() {
        let registry = AdvisorRegistry::builtin();
        let advisor = tim_cook();

        assert_eq!(render_advisor_list(&registry), render_advisor_list(&registry));
        assert_eq!(render_philosophy(&advisor), render_philosophy(&advisor));
        assert_eq!(
            render_consultation(&advisor, "s", "c"),
            render_consultation(&advisor, "s", "c")
        );
        assert_eq!(render_board_meeting("t", "b"), render_board_meeting("t", "b"));
    }
}
