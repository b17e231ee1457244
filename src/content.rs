use crate::components::icon::IconKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub color_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color_class: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Conversion-First Design",
        description: "We don't just build pretty sites. We build sales machines optimized for the modern buyer's journey.",
        icon: IconKind::Target,
        color_class: "accent-violet",
    },
    Feature {
        title: "Lightning Fast Performance",
        description: "Sub-second load times that keep users engaged and boost your SEO rankings automatically.",
        icon: IconKind::Zap,
        color_class: "accent-cyan",
    },
    Feature {
        title: "Data-Driven Strategy",
        description: "Every pixel is placed with purpose, backed by heatmaps and user behavior analytics.",
        icon: IconKind::TrendingUp,
        color_class: "accent-emerald",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Jenkins",
        role: "CEO at TechFlow",
        content: "Convertic transformed our bounce rate from 65% to 22% in just one month. Our sales have never been higher.",
        avatar_url: "https://picsum.photos/seed/sarah/100/100",
    },
    Testimonial {
        name: "Marcus Thorne",
        role: "Founder of Bloom",
        content: "The attention to detail is insane. It's not just a website; it's a premium brand experience that converts.",
        avatar_url: "https://picsum.photos/seed/marcus/100/100",
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Marketing Director",
        content: "Working with this agency was the best investment we made this year. The ROI was immediate.",
        avatar_url: "https://picsum.photos/seed/elena/100/100",
    },
];

pub const RESULT_POINTS: [&str; 4] = [
    "Average 45% increase in conversion rates",
    "Optimized for mobile-first indexing",
    "Built-in SEO and performance best practices",
    "Seamless integration with your tech stack",
];

pub const STATS: [Stat; 4] = [
    Stat {
        value: "3.2x",
        label: "ROI Increase",
        color_class: "accent-violet",
    },
    Stat {
        value: "-40%",
        label: "Bounce Rate",
        color_class: "accent-cyan",
    },
    Stat {
        value: "10k+",
        label: "Leads Generated",
        color_class: "accent-emerald",
    },
    Stat {
        value: "99.9",
        label: "Perf. Score",
        color_class: "accent-violet",
    },
];
