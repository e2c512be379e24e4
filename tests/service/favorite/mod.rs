mod add_favorite;
mod delete_favorite;
