// =============================================================================
// IgniteX Web - Content Feed
// =============================================================================
// Table of Contents:
// 1. Record Types
// 2. Content Feed
// 3. IgniteX Feed Data
// =============================================================================
//
// Everything the page displays lives here as static data. Maintainers edit the
// arrays directly; nothing is parsed or validated at runtime. Insertion order is
// display order.

use crate::components::icons::Icon;

// -----------------------------------------------------------------------------
// 1. Record Types
// -----------------------------------------------------------------------------

/// A person shown on the page: leader, team member, or story author.
///
/// For leaders `role` is the position and `message` the quote; for team cards
/// and stories `message` is the member's story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub message: &'static str,
    pub image: &'static str,
}

/// A photo in the event highlights grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A video in the showcase. `source` is a direct file or a cloud-drive link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoRecord {
    pub thumbnail: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

/// A link to an external photo archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchiveLink {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// Which column of the timeline a milestone sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// A dated entry on the journey timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub icon: Icon,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub side: Side,
}

/// A headline statistic in the achievements grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub icon: Icon,
    pub title: &'static str,
    pub stat: &'static str,
    pub description: &'static str,
}

// -----------------------------------------------------------------------------
// 2. Content Feed
// -----------------------------------------------------------------------------

/// The complete, read-only set of records behind the page.
#[derive(Clone, Copy, Debug)]
pub struct ContentFeed {
    pub leaders: &'static [Member],
    pub core_team: &'static [Member],
    pub extended_team: &'static [Member],
    pub stories: &'static [Member],
    pub events: &'static [EventRecord],
    pub videos: &'static [VideoRecord],
    pub milestones: &'static [Milestone],
    pub achievements: &'static [Achievement],
    pub archives: &'static [ArchiveLink],
}

impl ContentFeed {
    /// The shipped IgniteX feed.
    pub fn ignitex() -> &'static ContentFeed {
        &IGNITEX_FEED
    }
}

// -----------------------------------------------------------------------------
// 3. IgniteX Feed Data
// -----------------------------------------------------------------------------

static IGNITEX_FEED: ContentFeed = ContentFeed {
    leaders: LEADERS,
    core_team: CORE_TEAM,
    extended_team: EXTENDED_TEAM,
    stories: STORIES,
    events: EVENTS,
    videos: VIDEOS,
    milestones: MILESTONES,
    achievements: ACHIEVEMENTS,
    archives: ARCHIVES,
};

const LEADERS: &[Member] = &[
    Member {
        name: "Dr. S N V L Narasimha Raju",
        role: "Chairman",
        message: "The purpose of education is to create leaders who serve, inspire and bring change to the world.",
        image: "/images/chair.jpg",
    },
    Member {
        name: "Dr. H N Ramesh",
        role: "Principal",
        message: "Learning is a journey where knowledge fuels progress and wisdom guides the way.",
        image: "/images/principal.jpg",
    },
    Member {
        name: "Dr. B K Manjunath",
        role: "Faculty Advisor",
        message: "Entrepreneurship is not a career, it's a mindset of solving problems and creating impact.",
        image: "/images/manjusir.jpg",
    },
    Member {
        name: "Dr. E Saravana Kumar",
        role: "Head of Department, CSE",
        message: "An educated mind finds success; an educated heart finds purpose in serving others.",
        image: "/images/csehod.jpg",
    },
    Member {
        name: "Mrs Manjula L",
        role: "Assistant Professor, CSE",
        message: "Knowledge gains true value when shared for the betterment of others.",
        image: "/images/manjuphoto.JPG",
    },
];

const STORIES: &[Member] = &[
    Member {
        name: "Pooja",
        role: "Student Coordinator",
        message: "Stepping onto the grand stage of IIT Bombay was surreal. From the moment we arrived, I knew this was more than just an event. It was a gateway to endless possibilities. As a Student Coordinator, my role was to expand our network, meet like-minded innovators, and forge valuable partnerships. The energy in the room was electrifying, with students and industry leaders exchanging ideas that could shape the future. I felt a sense of pride, not just for myself but for our entire IgniteX family, knowing that we were putting our college on the national map. This experience gave me the confidence to dream bigger and push boundaries in ways I never imagined.",
        image: "/images/pooja.jpg",
    },
    Member {
        name: "Imthiyaz",
        role: "Secretary",
        message: "Building our startup incubation program from scratch was already an incredible challenge, but presenting it at IIT Bombay? That was a whole new level. I remember standing in front of an audience of investors, founders, and students, my heart pounding as I spoke about the vision of IgniteX. Every lesson I had learned about leadership, resilience, and adaptability came into play. The feedback, the connections, and the sheer thrill of representing our college at such a prestigious platform made all the late nights worth it. More than anything, I walked away with a deeper understanding of what it takes to turn ideas into reality.",
        image: "/images/imthi.jpg",
    },
    Member {
        name: "Nidhi",
        role: "Innovation and Research Head",
        message: "For me, IgniteX has always been about more than just startups. It's about telling a story that inspires others to innovate. At IIT Bombay, I had the opportunity to showcase our research-driven approach and present visual content that embodied our vision. Seeing our work displayed among some of the best entrepreneurial minds in the country was exhilarating. It wasn't just about competing; it was about contributing to a larger movement. I left with a renewed sense of purpose, knowing that the impact of our work extended beyond our campus and into the future of entrepreneurship.",
        image: "/images/nidgi.jpg",
    },
    Member {
        name: "Likhith",
        role: "Creative Head",
        message: "Crafting a brand identity for IgniteX wasn't just about making things look good. It was about creating an emotional connection. Standing in IIT Bombay, surrounded by hundreds of ambitious students, I realized the power of our messaging. Every banner, every presentation, every piece of content we had created told a story of passion, perseverance, and the relentless pursuit of innovation. Watching students resonate with our ideas, ask questions, and engage with our journey filled me with an overwhelming sense of accomplishment. This was more than a competition; it was a stage where creativity met entrepreneurship, and I was proud to be part of it.",
        image: "/images/likhi.jpg",
    },
];

const CORE_TEAM: &[Member] = &[
    Member {
        name: "Suhas",
        role: "Campus Ambassador",
        message: "Leading IgniteX has been transformative. From organizing our first workshop to representing Oxford at IIT Bombay.",
        image: "/images/suhas.jpg",
    },
    Member {
        name: "Imthiyaz",
        role: "Secretary",
        message: "Building our startup incubation program from scratch taught me invaluable lessons in leadership.",
        image: "/images/imthi.jpg",
    },
    Member {
        name: "Kavya",
        role: "Secretary",
        message: "Growing from small workshops to managing events with 300+ attendees has been incredible.",
        image: "/images/kavyabs.jpg",
    },
];

const EXTENDED_TEAM: &[Member] = &[
    Member {
        name: "Likhith",
        role: "Creative Head",
        message: "Crafting our brand identity and reaching hundreds of students.",
        image: "/images/likhi.jpg",
    },
    Member {
        name: "Adhiti",
        role: "Creative Head",
        message: "Designing impactful visual content and streamlining creative processes to enhance community engagement.",
        image: "/images/adit.jpg",
    },
    Member {
        name: "Faizan Khan",
        role: "Event Coordinator",
        message: "Organizing and managing events that connect students with resources and opportunities to help them grow.",
        image: "/images/Faiz.jpg",
    },
    Member {
        name: "Pranjali",
        role: "Innovation and Research Head",
        message: "Leading research initiatives and crafting engaging content to educate and inspire young entrepreneurs.",
        image: "/images/pranjali.jpg",
    },
    Member {
        name: "Danish",
        role: "Student Coordinator",
        message: "Overseeing financial planning and ensuring sustainable growth for student-led initiatives.",
        image: "/images/dani.jpg",
    },
    Member {
        name: "Kirthi",
        role: "Innovation and Research Head",
        message: "Developing innovative programs and fostering a culture of entrepreneurship within the student community.",
        image: "/images/kirthii.jpg",
    },
    Member {
        name: "Ravannan",
        role: "Student Coordinator",
        message: "Driving new initiatives and experimental programs for entrepreneurs.",
        image: "/images/ravanan.jpg",
    },
    Member {
        name: "Pooja",
        role: "Student Coordinator",
        message: "Expanding our network and building valuable partnerships.",
        image: "/images/pooja.jpg",
    },
    Member {
        name: "Dnyan",
        role: "Innovation and Research Head",
        message: "Organizing hands-on learning experiences, workshops, and research-driven activities for aspiring entrepreneurs.",
        image: "/images/dnyan.jpg",
    },
    Member {
        name: "Nidhi",
        role: "Innovation and Research Head",
        message: "Creating compelling visual and research-based content that embodies our innovative vision.",
        image: "/images/nidgi.jpg",
    },
    Member {
        name: "Sunil",
        role: "Event Coordinator",
        message: "Coordinating tech-driven events and fostering startup development initiatives.",
        image: "/images/sunil.png",
    },
    Member {
        name: "Chandana",
        role: "Innovation and Research Head",
        message: "Managing external communications, media relations, and branding strategies for innovation initiatives.",
        image: "/images/chandana.jpg",
    },
    Member {
        name: "Tarun",
        role: "Event Coordinator",
        message: "Identifying emerging trends in entrepreneurship and planning insightful events that empower students.",
        image: "/images/taru.jpg",
    },
];

const EVENTS: &[EventRecord] = &[
    EventRecord {
        image: "/images/competition.jpg",
        title: "Competitions",
        description: "Over 150 participants registered to our various competitions",
    },
    EventRecord {
        image: "/images/vichar.jpg",
        title: "Vicharagni",
        description: "22 startup ideas of various domains pitched at our flagship event",
    },
    EventRecord {
        image: "/images/workshops.jpg",
        title: "Workshops",
        description: "Hands-on learning experiences for budding entrepreneurs",
    },
];

const VIDEOS: &[VideoRecord] = &[
    VideoRecord {
        thumbnail: "/images/video1.jpg",
        title: "IgniteX Journey: From Campus to National Stage",
        duration: "2:28",
        description: "Our journey from a small campus club to winning at IIT Bombay E-Summit",
        source: "https://drive.google.com/file/d/1YOYXxvB2pwuNAAjB394pA7bmXoBHu_3G/view?usp=drivesdk",
    },
    VideoRecord {
        thumbnail: "/images/video2.jpg",
        title: "Startup Success Stories 2024",
        duration: "2:20",
        description: "Meet the student founders who raised their ideas",
        source: "https://drive.google.com/file/d/1DwuUaEIe9cCbfVfZlXYTaX8udaHvUfpG/view?usp=drive_link",
    },
];

const MILESTONES: &[Milestone] = &[
    Milestone {
        icon: Icon::Building,
        title: "IgniteX Formation",
        date: "August 2024",
        content: "Started with 16 passionate students and 1 faculty mentor",
        side: Side::Left,
    },
    Milestone {
        icon: Icon::Calendar,
        title: "First Major Event",
        date: "October 2024",
        content: "'Vicharagni' attracted 150+ participants",
        side: Side::Right,
    },
    Milestone {
        icon: Icon::Trophy,
        title: "First Recognition",
        date: "December 2024",
        content: "Top 150 Campus Ambassadors - E-Cell IIT Bombay",
        side: Side::Left,
    },
    Milestone {
        icon: Icon::Star,
        title: "E-Summit Selection",
        date: "January 2024",
        content: "Selected among top 100 E-Cells nationwide",
        side: Side::Right,
    },
    Milestone {
        icon: Icon::Award,
        title: "National Achievement",
        date: "February 2024",
        content: "Secured 66th place at IIT Bombay E-Summit",
        side: Side::Left,
    },
];

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: Icon::Users,
        title: "Student Engagement",
        stat: "300+",
        description: "Active participants across all programs",
    },
    Achievement {
        icon: Icon::Lightbulb,
        title: "Startups Supported",
        stat: "4",
        description: "Student startups under mentorship",
    },
    Achievement {
        icon: Icon::Target,
        title: "Growth",
        stat: "30%",
        description: "Increase in student participation",
    },
];

const ARCHIVES: &[ArchiveLink] = &[
    ArchiveLink {
        title: "Flagship Event Vicharagni",
        url: "https://drive.google.com/drive/folders/1Dm90K92v6OoTHP2WeZZl27NX-uVODpv_",
        description: "Highlights from our annual startup pitch event",
    },
    ArchiveLink {
        title: "E-Summit 2024 Gallery",
        url: "#",
        description: "Memories from our biggest entrepreneurship summit",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{resolve_video_source, VideoSource};

    #[test]
    fn test_feed_sections_populated() {
        let feed = ContentFeed::ignitex();
        assert_eq!(feed.leaders.len(), 5);
        assert_eq!(feed.core_team.len(), 3);
        assert_eq!(feed.extended_team.len(), 13);
        assert_eq!(feed.stories.len(), 4);
        assert_eq!(feed.events.len(), 3);
        assert_eq!(feed.videos.len(), 2);
        assert_eq!(feed.milestones.len(), 5);
        assert_eq!(feed.achievements.len(), 3);
        assert_eq!(feed.archives.len(), 2);
    }

    #[test]
    fn test_feed_preserves_insertion_order() {
        let feed = ContentFeed::ignitex();
        assert_eq!(feed.leaders[0].role, "Chairman");
        assert_eq!(feed.stories[0].name, "Pooja");
        assert_eq!(feed.stories[3].name, "Likhith");
        assert_eq!(feed.extended_team.last().map(|m| m.name), Some("Tarun"));
    }

    #[test]
    fn test_timeline_alternates_sides() {
        let sides: Vec<Side> = ContentFeed::ignitex().milestones.iter().map(|m| m.side).collect();
        for pair in sides.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_timeline_dates_match_published_content() {
        let dates: Vec<&str> = ContentFeed::ignitex().milestones.iter().map(|m| m.date).collect();
        assert_eq!(
            dates,
            vec!["August 2024", "October 2024", "December 2024", "January 2024", "February 2024"]
        );
    }

    #[test]
    fn test_shipped_videos_embed_from_drive() {
        for video in ContentFeed::ignitex().videos {
            match resolve_video_source(video.source) {
                VideoSource::DriveEmbed(url) => assert!(url.ends_with("/preview")),
                other => panic!("expected drive embed for {}, got {:?}", video.title, other),
            }
        }
    }
}
