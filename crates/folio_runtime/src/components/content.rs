use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One-based page cursor for the resume viewer.
pub(crate) struct ResumePager {
    page: u32,
    pages: u32,
}

impl ResumePager {
    pub(crate) fn new(pages: u32) -> Self {
        Self {
            page: 1,
            pages: pages.max(1),
        }
    }

    pub(crate) fn page(self) -> u32 {
        self.page
    }

    pub(crate) fn pages(self) -> u32 {
        self.pages
    }

    pub(crate) fn has_previous(self) -> bool {
        self.page > 1
    }

    pub(crate) fn has_next(self) -> bool {
        self.page < self.pages
    }

    pub(crate) fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub(crate) fn next(self) -> Self {
        Self {
            page: (self.page + 1).min(self.pages),
            ..self
        }
    }
}

#[component]
pub(super) fn ResumeViewer() -> impl IntoView {
    let config = desktop_config();
    let resume_file = config.resume_file.clone();
    let download = resume_file.clone();
    let pager = create_rw_signal(ResumePager::new(config.resume_pages));

    view! {
        <div class="resume">
            <div class="resume-toolbar">
                <button
                    aria-label="Previous page"
                    disabled=move || !pager.get().has_previous()
                    on:click=move |_| pager.update(|p| *p = p.previous())
                >
                    "‹"
                </button>
                <span>{move || format!("Page {} of {}", pager.get().page(), pager.get().pages())}</span>
                <button
                    aria-label="Next page"
                    disabled=move || !pager.get().has_next()
                    on:click=move |_| pager.update(|p| *p = p.next())
                >
                    "›"
                </button>
                <a href=download download="" title="Download resume">"Download"</a>
            </div>
            <iframe
                class="resume-document"
                title="Resume"
                src=move || format!("{}#page={}", resume_file, pager.get().page())
            ></iframe>
        </div>
    }
}

#[component]
pub(super) fn TextFile(payload: Signal<Option<WindowPayload>>) -> impl IntoView {
    view! {
        <article class="text-file">
            {move || {
                payload
                    .get()
                    .map(|node| {
                        view! {
                            <div class="text-file-body">
                                {node
                                    .image
                                    .clone()
                                    .map(|src| view! { <img class="text-file-image" src=src alt="" /> })}
                                {node.subtitle.clone().map(|subtitle| view! { <h3>{subtitle}</h3> })}
                                {node
                                    .description
                                    .iter()
                                    .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </article>
    }
}

#[component]
pub(super) fn ImageFile(payload: Signal<Option<WindowPayload>>) -> impl IntoView {
    view! {
        <figure class="image-file">
            {move || {
                payload.get().and_then(|node| {
                    node.image_url
                        .clone()
                        .map(|src| view! { <img src=src alt=node.name.clone() /> })
                })
            }}
        </figure>
    }
}

#[component]
pub(super) fn ContactCard() -> impl IntoView {
    view! {
        <div class="contact">
            <h3>"Let's connect"</h3>
            <ul class="socials">
                <For each=|| desktop_config().socials.clone() key=|social| social.id let:social>
                    <li style=format!("background-color:{};", social.bg)>
                        <a href=social.link.clone() target="_blank" rel="noopener noreferrer" title=social.text.clone()>
                            <img src=social.icon.clone() alt="" />
                            <span>{social.text.clone()}</span>
                        </a>
                    </li>
                </For>
            </ul>
        </div>
    }
}

#[component]
pub(super) fn ArticleList() -> impl IntoView {
    view! {
        <div class="articles">
            <h3>"My Developer Blog"</h3>
            <For each=|| desktop_config().blog_posts.clone() key=|post| post.id let:post>
                <div class="blog-post">
                    <img src=post.image.clone() alt="" />
                    <div>
                        <p>{post.title.clone()}</p>
                        <a href=post.link.clone() target="_blank" rel="noopener noreferrer">
                            "Check out the full post"
                        </a>
                    </div>
                </div>
            </For>
        </div>
    }
}

#[component]
pub(super) fn PhotoGallery() -> impl IntoView {
    view! {
        <div class="photos">
            <ul class="photos-sidebar">
                <For each=|| desktop_config().photo_links.clone() key=|link| link.id let:link>
                    <li>
                        <img src=link.icon.clone() alt="" />
                        <p>{link.title.clone()}</p>
                    </li>
                </For>
            </ul>
            <ul class="photos-gallery">
                <For each=|| desktop_config().gallery.clone() key=|photo| photo.id let:photo>
                    <li>
                        <img src=photo.img.clone() alt=format!("Gallery image {}", photo.id) />
                    </li>
                </For>
            </ul>
        </div>
    }
}

#[component]
pub(super) fn TechStack() -> impl IntoView {
    let categories = desktop_config().tech_stack.len();

    view! {
        <div class="tech-stack">
            <p class="prompt">
                <span class="prompt-symbol">"@folio %"</span>
                " show tech stack"
            </p>
            <ul>
                {desktop_config()
                    .tech_stack
                    .iter()
                    .map(|category| {
                        view! {
                            <li>
                                <span class="check">"✓"</span>
                                <h3>{category.category.clone()}</h3>
                                <p>{category.items.join(", ")}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="footnote">{format!("✓ {categories} of {categories} stacks loaded successfully")}</p>
        </div>
    }
}
