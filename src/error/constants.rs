use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "E000", "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "E001",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "E002", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "E003",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "E004", "invalid data");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "E005", "database error");
const_error!(
    JSON_DESERIALIZE,
    INTERNAL_SERVER_ERROR,
    "E006",
    "failed to deserialize json"
);
const_error!(INVALID_QUERY, BAD_REQUEST, "E007", "invalid query string");
const_error!(UPSTREAM_HTTP, BAD_GATEWAY, "E010", "upstream request failed");
const_error!(
    UPSTREAM_UNREACHABLE,
    BAD_GATEWAY,
    "E011",
    "upstream service unreachable"
);
const_error!(
    UPSTREAM_BODY,
    BAD_GATEWAY,
    "E012",
    "unexpected upstream response"
);
const_error!(NOT_FOUND, NOT_FOUND, "E020", "not found");
const_error!(INVALID_MOVIE_ID, BAD_REQUEST, "E021", "invalid movie id");
const_error!(INVALID_GAME_ID, BAD_REQUEST, "E022", "invalid game id");
const_error!(
    STRUCTURED_OUTPUT,
    BAD_GATEWAY,
    "E030",
    "model response is not valid trivia json"
);
const_error!(
    INVALID_TRIVIA,
    BAD_GATEWAY,
    "E031",
    "model response violates the trivia contract"
);
const_error!(EMPTY_SOURCE_TEXT, BAD_REQUEST, "E032", "source text is empty");
const_error!(
    EMPTY_MODEL_RESPONSE,
    BAD_GATEWAY,
    "E033",
    "model returned no content"
);
const_error!(
    UNKNOWN_SEARCH_METHOD,
    INTERNAL_SERVER_ERROR,
    "E040",
    "unknown search method"
);
const_error!(
    EMBEDDING_MISMATCH,
    BAD_GATEWAY,
    "E041",
    "embedding model returned an unexpected number of vectors"
);
