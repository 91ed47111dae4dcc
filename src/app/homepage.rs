use std::time::Duration;

use leptos::prelude::*;

use super::motion::{Appear, FloatingCard, Reveal, TypingText};
use crate::content::{
    copyright_line, Anchor, Project, Skill, CONTACT, EDUCATION, PROFILE, PROJECTS, SKILLS,
};
use crate::motion::{stagger, Entrance};

const SKILL_STAGGER: Duration = Duration::from_millis(100);
const PROJECT_STAGGER: Duration = Duration::from_millis(200);

const SECTION_HEADING: &str = "text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-gray-900 to-purple-600 bg-clip-text text-transparent";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <SkillsSection />
        <ProjectsSection />
        <EducationSection />
        <ContactFooter />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=Anchor::Home.id()
            class="min-h-screen flex items-center justify-center px-4 pt-20"
        >
            <div class="text-center max-w-4xl mx-auto">
                <Appear
                    entrance=Entrance::scale_in(0.5, Duration::from_millis(800))
                    class="mb-8"
                >
                    <div class="w-32 h-32 mx-auto mb-8 rounded-full bg-gradient-to-r from-purple-400 to-blue-500 p-1">
                        <div class="w-full h-full rounded-full overflow-hidden">
                            <img
                                src=PROFILE.avatar_url
                                alt=format!("{} Profile", PROFILE.name)
                                width="128"
                                height="128"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </Appear>
                <Reveal>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-gray-900 via-purple-600 to-blue-600 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </h1>
                </Reveal>
                <div class="text-2xl md:text-3xl text-gray-600 mb-8 h-12">
                    <TypingText text=PROFILE.tagline />
                </div>
                <Reveal class="mb-12">
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto leading-relaxed">
                        {PROFILE.bio}
                    </p>
                </Reveal>
                <Appear
                    entrance=Entrance::fade_up(20).with_delay(Duration::from_millis(800))
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center"
                >
                    <a
                        href=PROFILE.resume_url
                        download="resume.pdf"
                        class="bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700 text-white px-8 py-3 rounded-full text-lg font-medium shadow-lg hover:shadow-xl transition-all"
                    >
                        "⬇ Download Resume"
                    </a>
                    <div class="flex gap-4">
                        {PROFILE
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="p-3 rounded-full bg-white shadow-lg hover:shadow-xl transition-all border border-gray-200 hover:scale-110 active:scale-95 text-gray-700 text-2xl leading-none"
                                    >
                                        <i class=social.icon_class></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Appear>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Anchor::Skills.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class=SECTION_HEADING>"Skills & Technologies"</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {stagger(SKILLS, SKILL_STAGGER)
                        .map(|(delay, skill)| view! { <SkillCard skill=*skill delay /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill, delay: Duration) -> impl IntoView {
    view! {
        <FloatingCard delay>
            <div class="h-full bg-white/60 backdrop-blur-sm border border-white/20 shadow-lg hover:shadow-xl transition-all duration-300 rounded-2xl p-6 text-center">
                <div class=format!(
                    "w-16 h-16 mx-auto mb-4 rounded-2xl bg-gradient-to-r {} flex items-center justify-center text-white text-2xl font-bold shadow-lg",
                    skill.color_gradient,
                )>{skill.icon}</div>
                <h3 class="text-xl font-semibold text-gray-800">{skill.name}</h3>
            </div>
        </FloatingCard>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section
            id=Anchor::Projects.id()
            class="py-20 px-4 bg-gradient-to-r from-purple-50 to-blue-50"
        >
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class=SECTION_HEADING>"Featured Projects"</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {stagger(PROJECTS, PROJECT_STAGGER)
                        .map(|(delay, project)| view! { <ProjectCard project=*project delay /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, delay: Duration) -> impl IntoView {
    view! {
        <FloatingCard delay>
            <a
                href=project.link
                class="block h-full bg-white/80 backdrop-blur-sm border border-white/20 shadow-lg hover:shadow-2xl transition-all duration-300 rounded-2xl overflow-hidden group"
            >
                <div class="relative overflow-hidden">
                    <img
                        src=project.image_src()
                        alt=project.title
                        width="300"
                        height="200"
                        loading="lazy"
                        class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                    <div class="absolute top-4 right-4 p-2 bg-white/90 rounded-full shadow-lg opacity-0 scale-75 group-hover:opacity-100 group-hover:scale-100 transition-all text-gray-700 text-sm leading-none">
                        "↗"
                    </div>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-bold mb-2 text-gray-800">{project.title}</h3>
                    <p class="text-gray-600 mb-4 text-sm leading-relaxed">{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech_tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-gradient-to-r from-purple-100 to-blue-100 text-purple-700 rounded-full text-xs font-medium">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </a>
        </FloatingCard>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <Reveal>
                    <h2 class=SECTION_HEADING>"Education"</h2>
                </Reveal>
                <FloatingCard>
                    <div class="bg-white/60 backdrop-blur-sm border border-white/20 shadow-lg rounded-2xl p-8 text-center">
                        <div class="text-5xl text-purple-400 mb-4">"🎓"</div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-2">{EDUCATION.degree}</h3>
                        <p class="text-gray-700 mb-10">{EDUCATION.school}</p>
                        <p class="text-lg text-gray-700 leading-relaxed">{EDUCATION.summary}</p>
                    </div>
                </FloatingCard>
            </div>
        </section>
    }
}

#[component]
fn ContactFooter() -> impl IntoView {
    view! {
        <footer
            id=Anchor::Contact.id()
            class="py-16 px-4 bg-gradient-to-r from-gray-900 to-purple-900 text-white"
        >
            <div class="max-w-4xl mx-auto text-center">
                <Reveal>
                    <h2 class="text-3xl md:text-4xl font-bold mb-8">"Let's Work Together"</h2>
                </Reveal>
                <Reveal>
                    <p class="text-lg mb-8 text-gray-300">
                        "Ready to bring your ideas to life? Let's create something amazing together."
                    </p>
                </Reveal>
                <Appear
                    entrance=Entrance::fade_up(20).with_delay(Duration::from_millis(400))
                    class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-8"
                >
                    <a
                        href=CONTACT.mailto()
                        class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors"
                    >
                        "✉ "
                        {CONTACT.email}
                    </a>
                    <a
                        href=CONTACT.tel()
                        class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors"
                    >
                        "☎ "
                        {CONTACT.phone_display}
                    </a>
                    <span class="flex items-center gap-2 text-gray-300">
                        "📍 " {CONTACT.location}
                    </span>
                </Appear>
                <Appear
                    entrance=Entrance::fade_in().with_delay(Duration::from_millis(600))
                    class="border-t border-gray-700 pt-8"
                >
                    <p class="text-gray-400">{copyright_line()}</p>
                </Appear>
            </div>
        </footer>
    }
}
