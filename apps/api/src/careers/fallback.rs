//! Static, stream-keyed career lists served when the provider is unavailable
//! or its answer does not decode. Pure data: only the stream label matters.

use tracing::debug;

use crate::models::assessment::Stream;
use crate::models::career::Career;

struct CareerTemplate {
    name: &'static str,
    suitability: &'static str,
    course: &'static str,
    duration: &'static str,
    estimated_cost: &'static str,
    top_colleges: &'static [&'static str],
    job_prospects: &'static str,
    starting_salary: &'static str,
    roadmap: &'static [&'static str],
}

impl CareerTemplate {
    fn to_career(&self) -> Career {
        Career {
            name: self.name.to_string(),
            suitability: self.suitability.to_string(),
            course: self.course.to_string(),
            duration: self.duration.to_string(),
            estimated_cost: self.estimated_cost.to_string(),
            top_colleges: self.top_colleges.iter().map(|s| s.to_string()).collect(),
            job_prospects: self.job_prospects.to_string(),
            starting_salary: self.starting_salary.to_string(),
            roadmap: self.roadmap.iter().map(|s| s.to_string()).collect(),
        }
    }
}

static SCIENCE: [CareerTemplate; 3] = [
    CareerTemplate {
        name: "Software Engineering (B.Tech CSE)",
        suitability: "Your strong Science background and analytical skills make you ideal for IT. High demand in India with excellent growth.",
        course: "B.Tech Computer Science",
        duration: "4 years",
        estimated_cost: "₹4-15 Lakhs",
        top_colleges: &["IITs", "NITs", "BITS Pilani", "VIT", "SRM"],
        job_prospects: "Very high demand. Companies like TCS, Infosys, Google, Microsoft hire freshers regularly.",
        starting_salary: "₹4-12 LPA",
        roadmap: &[
            "Clear JEE/State entrance exam",
            "Get admission in B.Tech CSE",
            "Learn programming & projects",
            "Internships in 3rd year",
            "Campus placement in 4th year",
        ],
    },
    CareerTemplate {
        name: "Medicine (MBBS)",
        suitability: "If you have interest in helping people and have good memory, MBBS offers a respected and stable career.",
        course: "MBBS + MD/MS",
        duration: "5.5 years (MBBS) + 3 years (PG)",
        estimated_cost: "₹20-80 Lakhs",
        top_colleges: &["AIIMS", "CMC Vellore", "JIPMER", "MAMC Delhi", "KEM Mumbai"],
        job_prospects: "Always in demand. Can work in hospitals, start own clinic, or join government service.",
        starting_salary: "₹6-15 LPA",
        roadmap: &[
            "Clear NEET UG exam",
            "Complete MBBS from good college",
            "Do internship seriously",
            "Prepare for NEET PG",
            "Specialize in chosen field",
        ],
    },
    CareerTemplate {
        name: "Data Science & AI",
        suitability: "Your Maths and Science skills are perfect for this futuristic field. One of the highest paying careers today.",
        course: "B.Tech + M.Tech/MS in Data Science",
        duration: "4-6 years",
        estimated_cost: "₹5-20 Lakhs",
        top_colleges: &["IITs", "IISc Bangalore", "ISI Kolkata", "IIIT Hyderabad"],
        job_prospects: "Extremely high demand. Every company needs data scientists. Work from home options available.",
        starting_salary: "₹8-20 LPA",
        roadmap: &[
            "B.Tech in CSE/IT/Maths",
            "Learn Python, Statistics, ML",
            "Online certifications",
            "Build portfolio projects",
            "Apply to tech companies",
        ],
    },
];

static COMMERCE: [CareerTemplate; 3] = [
    CareerTemplate {
        name: "Chartered Accountancy (CA)",
        suitability: "Your Commerce background is perfect for CA. Most respected finance career in India with excellent income.",
        course: "CA Foundation + Intermediate + Final",
        duration: "4-5 years",
        estimated_cost: "₹1-3 Lakhs",
        top_colleges: &["ICAI (Institute of Chartered Accountants)"],
        job_prospects: "Very high demand in companies, audit firms, and self-practice. Can earn very well.",
        starting_salary: "₹7-15 LPA",
        roadmap: &[
            "Register for CA Foundation",
            "Clear Foundation exam",
            "Complete articleship training",
            "Clear Intermediate & Final",
            "Join firm or start practice",
        ],
    },
    CareerTemplate {
        name: "BBA + MBA",
        suitability: "Great path for business and management career. Opens doors to corporate leadership roles.",
        course: "BBA + MBA",
        duration: "3 + 2 years",
        estimated_cost: "₹10-25 Lakhs",
        top_colleges: &["IIMs", "XLRI", "FMS Delhi", "SP Jain", "Christ University"],
        job_prospects: "Wide range of jobs - Marketing, Finance, HR, Operations in top companies.",
        starting_salary: "₹6-25 LPA (depends on college)",
        roadmap: &[
            "Complete BBA from good college",
            "Gain 1-2 years work experience",
            "Prepare for CAT/XAT",
            "Get into top MBA college",
            "Summer internship & placement",
        ],
    },
    CareerTemplate {
        name: "Investment Banking & Finance",
        suitability: "If you love numbers and markets, this is one of the highest paying careers in Commerce stream.",
        course: "B.Com + CFA/MBA Finance",
        duration: "5-6 years",
        estimated_cost: "₹8-20 Lakhs",
        top_colleges: &["SRCC Delhi", "St. Xavier's", "Narsee Monjee", "Christ University"],
        job_prospects: "Jobs in banks, mutual funds, stock broking. Can earn very high with experience.",
        starting_salary: "₹6-15 LPA",
        roadmap: &[
            "B.Com from top college",
            "Learn about stock markets",
            "Do CFA or MBA Finance",
            "Internship in finance sector",
            "Join investment firm",
        ],
    },
];

static ARTS: [CareerTemplate; 3] = [
    CareerTemplate {
        name: "Law (LLB)",
        suitability: "Arts students excel in Law. Great career for those who like arguments, reading, and helping people.",
        course: "BA LLB / LLB",
        duration: "5 years (Integrated) / 3 years",
        estimated_cost: "₹3-15 Lakhs",
        top_colleges: &["NLSIU Bangalore", "NALSAR Hyderabad", "NLU Delhi", "NUJS Kolkata"],
        job_prospects: "Work as advocate, legal advisor, judge, or in corporate legal teams.",
        starting_salary: "₹4-12 LPA",
        roadmap: &[
            "Clear CLAT/AILET exam",
            "Complete law degree",
            "Internships under senior lawyers",
            "Enroll with Bar Council",
            "Start practice or join firm",
        ],
    },
    CareerTemplate {
        name: "Journalism & Mass Communication",
        suitability: "If you love writing, speaking, and staying updated, media is exciting and rewarding.",
        course: "BA/BMM in Journalism",
        duration: "3 years",
        estimated_cost: "₹2-8 Lakhs",
        top_colleges: &["IIMC Delhi", "Xavier's Mumbai", "Symbiosis Pune", "ACJ Chennai"],
        job_prospects: "Work in news channels, newspapers, digital media, PR agencies.",
        starting_salary: "₹3-8 LPA",
        roadmap: &[
            "Complete Journalism degree",
            "Internship at media house",
            "Build portfolio of work",
            "Specialize in area of interest",
            "Join media organization",
        ],
    },
    CareerTemplate {
        name: "Civil Services (IAS/IPS)",
        suitability: "Arts graduates have high success rate in UPSC. Most prestigious career to serve nation.",
        course: "Any Graduation + UPSC Prep",
        duration: "3-5 years",
        estimated_cost: "₹2-5 Lakhs (coaching)",
        top_colleges: &["Any recognized university", "Coaching: Vajiram, Vision IAS"],
        job_prospects: "Become IAS, IPS, IFS officer. Lead government departments. Serve nation.",
        starting_salary: "₹8-12 LPA + perks",
        roadmap: &[
            "Complete graduation",
            "Start UPSC preparation",
            "Clear Prelims exam",
            "Clear Mains exam",
            "Clear Interview & training",
        ],
    },
];

pub fn careers_for_stream(stream: Stream) -> Vec<Career> {
    let table = match stream {
        Stream::Science => &SCIENCE,
        Stream::Commerce => &COMMERCE,
        Stream::Arts => &ARTS,
    };
    table.iter().map(CareerTemplate::to_career).collect()
}

/// Fallback for a raw stream label. Unrecognized labels get the Science list.
pub fn fallback_careers(stream_label: &str) -> Vec<Career> {
    let stream = Stream::from_label(stream_label).unwrap_or(Stream::Science);
    debug!(
        "Serving {} fallback careers for stream {stream_label:?}",
        stream.label()
    );
    careers_for_stream(stream)
}
