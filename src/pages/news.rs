use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::data::content::{ARTICLES, Article};
use crate::dom;

fn article_notice(title: &str) -> String {
	format!(
		"Opening article: \"{title}\"\n\n(This is a demo interaction. In a production environment, this would navigate to the full article page.)"
	)
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
	let open = move |ev: MouseEvent| {
		ev.stop_propagation();
		dom::alert(&article_notice(article.title));
	};
	view! {
		<article class="article-card" on:click=open>
			<div class="article-image">
				<img src=article.image alt=article.title loading="lazy" decoding="async" />
				<span class="article-category">{article.category}</span>
			</div>
			<div class="article-body">
				<div class="article-meta">
					<span>
						<IconSvg icon=Icon::Calendar size=12 />
						{article.date}
					</span>
					<span>
						<IconSvg icon=Icon::User size=12 />
						{article.author}
					</span>
				</div>
				<h3>{article.title}</h3>
				<p>{article.excerpt}</p>
				<button class="article-link" on:click=open>
					"Read Article"
					<IconSvg icon=Icon::ArrowRight size=16 />
				</button>
			</div>
		</article>
	}
}

#[component]
pub fn News() -> impl IntoView {
	let document_url = expect_context::<SiteConfig>().regulation_document_url;

	view! {
		<div class="page news">
			<section class="plain-hero">
				<span class="eyebrow">"Insights"</span>
				<h1>"News & Regulations"</h1>
				<p>
					"Stay updated with the latest changes in Indonesian agricultural law, Ministry Decrees, and industry best practices."
				</p>
			</section>

			<div class="container">
				<div class="grid grid-3">
					{ARTICLES.iter().map(|article| view! { <ArticleCard article=*article /> }).collect_view()}
				</div>

				<section class="essential-docs">
					<h2>
						<IconSvg icon=Icon::BookOpen />
						"Essential Documents"
					</h2>
					<div class="doc-banner">
						<div>
							<h3>"Law No. 12 of 1992 PDF"</h3>
							<p>
								"The fundamental legal framework for plant cultivation systems in Indonesia. Essential reading for all agricultural business operators."
							</p>
						</div>
						<button class="btn btn-light" on:click=move |_| dom::open_in_new_tab(document_url)>
							"Download PDF"
						</button>
					</div>
				</section>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn article_notice_quotes_the_title() {
		let notice = article_notice(ARTICLES[0].title);
		assert!(notice.starts_with("Opening article: \"Understanding Law No. 12 of 1992\""));
	}
}
