use super::super::domain::{
    Category, CategoryDescription, Profile, ProfileKey, Question, QuestionCatalog,
};
use super::super::resolver::ProfileTable;

/// Question label followed by the D, I, S and C phrases.
const STANDARD_QUESTIONS: [(&str, [&str; 4]); 40] = [
    (
        "Starting a new project",
        [
            "I set the goal and push to get moving",
            "I rally people with enthusiasm",
            "I make sure everyone is comfortable with the plan",
            "I gather the facts before committing",
        ],
    ),
    (
        "In a meeting",
        [
            "I steer the discussion toward a decision",
            "I keep the energy up and share ideas",
            "I listen and support what others say",
            "I question assumptions and check details",
        ],
    ),
    (
        "Under pressure",
        [
            "I take charge and act quickly",
            "I talk it through with others",
            "I stay calm and keep a steady pace",
            "I follow the procedure carefully",
        ],
    ),
    (
        "When making decisions",
        [
            "I decide fast and own the outcome",
            "I trust my instincts and optimism",
            "I consider how it affects the people involved",
            "I weigh the data and the risks",
        ],
    ),
    (
        "Facing conflict",
        [
            "I confront the issue head on",
            "I try to lighten the mood and persuade",
            "I look for a compromise that keeps the peace",
            "I point to the facts and the rules",
        ],
    ),
    (
        "My work style",
        [
            "Fast and results-driven",
            "Lively and people-oriented",
            "Patient and dependable",
            "Precise and systematic",
        ],
    ),
    (
        "What motivates me",
        [
            "Winning and overcoming challenges",
            "Recognition and being liked",
            "Security and harmony",
            "Quality and getting it right",
        ],
    ),
    (
        "How others describe me",
        [
            "Bold",
            "Charming",
            "Loyal",
            "Careful",
        ],
    ),
    (
        "When learning something new",
        [
            "I jump in and learn by doing",
            "I learn best in a group",
            "I prefer step-by-step guidance",
            "I read everything about it first",
        ],
    ),
    (
        "When plans change suddenly",
        [
            "I adapt fast and move on",
            "I see it as an exciting opportunity",
            "I need a little time to adjust",
            "I want to know the reasons for the change",
        ],
    ),
    (
        "In a team",
        [
            "I lead and set direction",
            "I motivate and connect people",
            "I cooperate and help where needed",
            "I keep standards and quality high",
        ],
    ),
    (
        "When communicating",
        [
            "I am brief and to the point",
            "I am expressive and animated",
            "I am warm and patient",
            "I am exact and well prepared",
        ],
    ),
    (
        "What I fear most",
        [
            "Losing control",
            "Being rejected",
            "Sudden instability",
            "Being wrong or criticised",
        ],
    ),
    (
        "Handling rules",
        [
            "I bend them if they slow results",
            "I find them a bit restrictive",
            "I follow them to keep things smooth",
            "I respect them and expect others to",
        ],
    ),
    (
        "Giving feedback",
        [
            "I say what needs fixing directly",
            "I keep it positive and encouraging",
            "I am gentle and considerate",
            "I give specific, detailed notes",
        ],
    ),
    (
        "At a social event",
        [
            "I look for people who can get things done",
            "I meet as many people as I can",
            "I stay with people I already know",
            "I observe before joining in",
        ],
    ),
    (
        "My pace",
        [
            "Quick and urgent",
            "Spontaneous and energetic",
            "Even and relaxed",
            "Deliberate and measured",
        ],
    ),
    (
        "When I disagree",
        [
            "I argue my point firmly",
            "I try to win people over",
            "I keep quiet to avoid friction",
            "I present evidence for my view",
        ],
    ),
    (
        "My desk or workspace",
        [
            "Set up for action, whatever works",
            "Colourful and full of mementos",
            "Comfortable and familiar",
            "Neat and organised",
        ],
    ),
    (
        "Approaching risk",
        [
            "I welcome it if the reward is big",
            "I take it if it sounds fun",
            "I avoid it when I can",
            "I analyse it thoroughly first",
        ],
    ),
    (
        "When someone needs help",
        [
            "I tell them what to do to solve it",
            "I cheer them up and encourage them",
            "I stay by their side and listen",
            "I help them work through the problem logically",
        ],
    ),
    (
        "Setting goals",
        [
            "Ambitious and challenging",
            "Inspiring and visible",
            "Realistic and achievable",
            "Clear and measurable",
        ],
    ),
    (
        "When a task is boring",
        [
            "I delegate it or finish it quickly",
            "I make a game of it or find company",
            "I just keep at it patiently",
            "I find a better method for it",
        ],
    ),
    (
        "Time management",
        [
            "I focus on what produces results",
            "I often juggle too many things",
            "I keep a steady routine",
            "I plan my schedule in detail",
        ],
    ),
    (
        "In a crisis",
        [
            "I make the call and give orders",
            "I keep morale up",
            "I keep people calm and supported",
            "I work out what went wrong",
        ],
    ),
    (
        "Receiving criticism",
        [
            "I push back if I disagree",
            "I feel hurt but bounce back",
            "I accept it quietly",
            "I want specifics and evidence",
        ],
    ),
    (
        "My strength",
        [
            "Decisiveness",
            "Persuasion",
            "Patience",
            "Accuracy",
        ],
    ),
    (
        "My weakness",
        [
            "Impatience",
            "Disorganisation",
            "Indecision",
            "Perfectionism",
        ],
    ),
    (
        "When selling an idea",
        [
            "I highlight the bottom line",
            "I tell a compelling story",
            "I show how it helps everyone",
            "I lay out the logic and data",
        ],
    ),
    (
        "Working alone versus with others",
        [
            "Alone, if others slow me down",
            "With others, always",
            "With a small trusted group",
            "Alone, so I can concentrate",
        ],
    ),
    (
        "Handling mistakes",
        [
            "I fix them fast and move on",
            "I laugh them off",
            "I worry about how they affected others",
            "I analyse them to prevent a repeat",
        ],
    ),
    (
        "My ideal boss",
        [
            "Gives me authority and freedom",
            "Is friendly and appreciative",
            "Is supportive and consistent",
            "Is competent and clear about expectations",
        ],
    ),
    (
        "When shopping",
        [
            "I know what I want and buy it",
            "I buy on impulse if it excites me",
            "I stick to brands I trust",
            "I compare options carefully",
        ],
    ),
    (
        "Handling routine",
        [
            "I find it tedious",
            "I find it dull without people around",
            "I find it reassuring",
            "I find it efficient",
        ],
    ),
    (
        "My tone of voice",
        [
            "Firm and direct",
            "Enthusiastic and varied",
            "Soft and steady",
            "Controlled and precise",
        ],
    ),
    (
        "When waiting",
        [
            "I get impatient quickly",
            "I start chatting with someone",
            "I wait calmly",
            "I use the time to review something",
        ],
    ),
    (
        "Leading others",
        [
            "I set high targets and drive toward them",
            "I inspire with vision and energy",
            "I lead by example and support",
            "I lead with structure and expertise",
        ],
    ),
    (
        "Choosing a weekend plan",
        [
            "Something competitive or challenging",
            "A party or a trip with friends",
            "A quiet day with family",
            "A hobby or project I can perfect",
        ],
    ),
    (
        "Sharing information",
        [
            "Only what is needed to act",
            "Freely, including personal stories",
            "When asked, with care",
            "Completely and accurately",
        ],
    ),
    (
        "At my best I am",
        [
            "Driven and confident",
            "Optimistic and inspiring",
            "Reliable and kind",
            "Thorough and principled",
        ],
    ),
];

impl QuestionCatalog {
    /// The built-in 40-question catalog.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_QUESTIONS
                .iter()
                .map(|(label, phrases)| Question::new(*label, *phrases))
                .collect(),
        )
    }
}

const STANDARD_PROFILES: [(&[Category], &str, &str); 20] = [
    (&[Category::D], "Driver", "Direct, decisive and results-focused."),
    (&[Category::I], "Promoter", "Outgoing, persuasive and optimistic."),
    (&[Category::S], "Supporter", "Patient, loyal and cooperative."),
    (&[Category::C], "Analyst", "Accurate, systematic and quality-minded."),
    (
        &[Category::D, Category::I],
        "Pioneer",
        "Drives results while winning people over.",
    ),
    (
        &[Category::D, Category::S],
        "Achiever",
        "Determined, yet steady in follow-through.",
    ),
    (
        &[Category::D, Category::C],
        "Challenger",
        "Demanding, logical and standards-driven.",
    ),
    (
        &[Category::I, Category::D],
        "Persuader",
        "Energises others toward ambitious goals.",
    ),
    (
        &[Category::I, Category::S],
        "Encourager",
        "Warm, sociable and supportive.",
    ),
    (
        &[Category::S, Category::I],
        "Counselor",
        "Approachable listener who builds trust.",
    ),
    (
        &[Category::S, Category::C],
        "Planner",
        "Methodical, calm and dependable.",
    ),
    (
        &[Category::C, Category::S],
        "Perfectionist",
        "Precise, careful and consistent.",
    ),
    (
        &[Category::C, Category::D],
        "Objective Thinker",
        "Analytical and decisive when the facts are clear.",
    ),
    (
        &[Category::D, Category::I, Category::S],
        "Inspirational Leader",
        "Sets the pace, rallies the team and sees it through.",
    ),
    (
        &[Category::I, Category::D, Category::C],
        "Persuasive Strategist",
        "Sells a vision backed by a plan.",
    ),
    (
        &[Category::I, Category::S, Category::D],
        "Agent",
        "People-centred helper who still gets things moving.",
    ),
    (
        &[Category::S, Category::C, Category::I],
        "Steady Specialist",
        "Reliable expert who keeps relationships strong.",
    ),
    (
        &[Category::C, Category::S, Category::D],
        "Careful Coordinator",
        "Organised and thorough, steady under pressure.",
    ),
    (
        &[Category::C, Category::D, Category::I],
        "Creative Analyst",
        "Rigorous thinker who pushes for new approaches.",
    ),
    (
        &[Category::D, Category::C, Category::S],
        "Quality Driver",
        "Results-oriented with an eye for detail.",
    ),
];

impl ProfileTable {
    /// Curated table covering every single-letter key plus common pairs and triples.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_PROFILES.iter().filter_map(|(letters, name, summary)| {
            ProfileKey::new(letters)
                .ok()
                .map(|key| (key, Profile::new(*name).with_summary(*summary)))
        }))
    }
}

const DOMINANCE_POINTS: &[&str] = &[
    "Focuses on results and the bottom line",
    "Accepts challenges and makes quick decisions",
    "Speaks directly and values autonomy",
    "May come across as impatient or blunt",
];

const INFLUENCE_POINTS: &[&str] = &[
    "Builds relationships and enjoys collaboration",
    "Persuades and motivates with enthusiasm",
    "Optimistic and expressive communicator",
    "May overlook details or overcommit",
];

const STEADINESS_POINTS: &[&str] = &[
    "Values stability, loyalty and cooperation",
    "Patient listener who supports others",
    "Prefers predictable, well-paced change",
    "May avoid conflict or resist sudden shifts",
];

const CONSCIENTIOUSNESS_POINTS: &[&str] = &[
    "Emphasises accuracy, quality and expertise",
    "Works systematically and follows standards",
    "Asks probing questions and checks facts",
    "May be overly critical or slow to decide",
];

impl CategoryDescription {
    pub fn standard(category: Category) -> Self {
        let (title, points) = match category {
            Category::D => ("D - Dominance", DOMINANCE_POINTS),
            Category::I => ("I - Influence", INFLUENCE_POINTS),
            Category::S => ("S - Steadiness", STEADINESS_POINTS),
            Category::C => ("C - Conscientiousness", CONSCIENTIOUSNESS_POINTS),
        };

        Self {
            category,
            title,
            points,
        }
    }
}
