use diesel::prelude::*;
use crate::models::{ Post, NewPost, UpdatePost };
use crate::schema::posts;

// GET ALL POSTS
pub fn list_posts(conn: &mut PgConnection) -> QueryResult<Vec<Post>> {
    posts::table.select(Post::as_select()).order(posts::id.asc()).load(conn)
}

// GET POST BY ID
pub fn find_post(conn: &mut PgConnection, post_id: i32) -> QueryResult<Option<Post>> {
    posts::table.find(post_id).select(Post::as_select()).first(conn).optional()
}

// CREATE POST
pub fn create_post(conn: &mut PgConnection, new_post: &NewPost) -> QueryResult<Post> {
    diesel::insert_into(posts::table).values(new_post).returning(Post::as_returning()).get_result(conn)
}

// UPDATE POST
// One conditional statement: a missing row comes back as `None` instead of a separate lookup.
pub fn update_post(
    conn: &mut PgConnection,
    post_id: i32,
    changes: &UpdatePost
) -> QueryResult<Option<Post>> {
    diesel
        ::update(posts::table.find(post_id))
        .set(changes)
        .returning(Post::as_returning())
        .get_result(conn)
        .optional()
}

// DELETE POST
pub fn delete_post(conn: &mut PgConnection, post_id: i32) -> QueryResult<bool> {
    let affected = diesel::delete(posts::table.find(post_id)).execute(conn)?;

    Ok(affected > 0)
}
