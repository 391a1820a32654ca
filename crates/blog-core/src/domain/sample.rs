//! Built-in sample dataset.
//!
//! Seeds empty stores and backs the client when the API is unreachable.

use super::post::{Author, DEFAULT_AVATAR, Post};

const NEXTJS_CONTENT: &str = r#"
<p>Next.js is a powerful React framework that makes building web applications easier and more efficient. In this post, we'll explore the basics of Next.js and how to get started with your first project.</p>

<h2>What is Next.js?</h2>
<p>Next.js is a React framework that provides a structure and features for your React applications, including:</p>
<ul>
  <li>Server-side rendering</li>
  <li>Static site generation</li>
  <li>API routes</li>
  <li>File-based routing</li>
  <li>Built-in CSS and Sass support</li>
</ul>

<h2>Setting Up Your First Next.js Project</h2>
<p>To create a new Next.js project, you can use the following command:</p>
<pre><code>npx create-next-app my-next-app</code></pre>
<p>Once the installation is complete, navigate to your project directory and start the development server:</p>
<pre><code>cd my-next-app
npm run dev</code></pre>

<h2>File-Based Routing</h2>
<p>Instead of configuring routes manually, Next.js creates routes based on the file structure in your pages directory. A file at pages/about.js is served at /about, and pages/blog/[slug].js is served at /blog/:slug.</p>

<h2>Data Fetching</h2>
<ul>
  <li><strong>getStaticProps</strong>: fetch data at build time</li>
  <li><strong>getStaticPaths</strong>: choose dynamic routes to pre-render</li>
  <li><strong>getServerSideProps</strong>: fetch data on each request</li>
</ul>

<h2>Conclusion</h2>
<p>With server-side rendering, static site generation and file-based routing built in, you can focus on building your application instead of configuring your environment.</p>
"#;

const TAILWIND_CONTENT: &str = r#"
<p>Tailwind CSS has changed the way we style web applications. In this post, we'll explore advanced techniques for using Tailwind CSS to create beautiful user interfaces.</p>

<h2>What is Tailwind CSS?</h2>
<p>Tailwind CSS is a utility-first CSS framework that lets you build custom designs without leaving your HTML. Instead of pre-designed components, it provides low-level utility classes.</p>

<h2>Advanced Techniques</h2>
<h3>1. Custom Variants</h3>
<p>Custom variants apply styles conditionally, for example only when a parent element is hovered:</p>
<pre><code>// tailwind.config.js
module.exports = {
  variants: {
    extend: {
      backgroundColor: ['group-hover'],
    }
  }
}</code></pre>

<h3>2. Responsive Design</h3>
<p>Breakpoint prefixes like sm:, md:, lg: and xl: apply different styles at different screen sizes.</p>
<pre><code>&lt;div class="text-sm md:text-base lg:text-lg"&gt;
  Responsive text
&lt;/div&gt;</code></pre>

<h3>3. Dark Mode</h3>
<p>The dark: prefix toggles styles between light and dark mode:</p>
<pre><code>&lt;div class="bg-white text-black dark:bg-black dark:text-white"&gt;
  Light by day, dark by night.
&lt;/div&gt;</code></pre>

<h2>Conclusion</h2>
<p>With its utility-first approach you can create complex designs without writing custom CSS.</p>
"#;

/// The fixed sample posts, oldest first.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            slug: "getting-started-with-nextjs".to_string(),
            title: "Getting Started with Next.js".to_string(),
            excerpt: "Learn how to build modern web applications with Next.js, React, and Tailwind CSS."
                .to_string(),
            date: "May 15, 2023".to_string(),
            read_time: "5 min read".to_string(),
            category: "Development".to_string(),
            author: Author {
                name: "John Doe".to_string(),
                avatar: DEFAULT_AVATAR.to_string(),
            },
            student_name: "JD2023".to_string(),
            source: "https://nextjs.org/docs".to_string(),
            content: NEXTJS_CONTENT.to_string(),
        },
        Post {
            id: 2,
            slug: "mastering-tailwind-css".to_string(),
            title: "Mastering Tailwind CSS".to_string(),
            excerpt: "Discover advanced techniques for building beautiful user interfaces with Tailwind CSS."
                .to_string(),
            date: "June 22, 2023".to_string(),
            read_time: "8 min read".to_string(),
            category: "Design".to_string(),
            author: Author {
                name: "Jane Smith".to_string(),
                avatar: DEFAULT_AVATAR.to_string(),
            },
            student_name: "JS2023".to_string(),
            source: "https://tailwindcss.com/docs".to_string(),
            content: TAILWIND_CONTENT.to_string(),
        },
    ]
}
