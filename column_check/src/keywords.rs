//! Reserved SQL keyword registry.
//!
//! A static, case-insensitive table mapping a keyword to the reference
//! dialects (PostgreSQL, MySQL, SQLite) that reserve it. The table is indexed
//! once per process on first lookup and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::Dialect;

const PG: &[Dialect] = &[Dialect::PostgreSql];
const MY: &[Dialect] = &[Dialect::MySql];
const LITE: &[Dialect] = &[Dialect::Sqlite];
const PG_MY: &[Dialect] = &[Dialect::PostgreSql, Dialect::MySql];
const PG_LITE: &[Dialect] = &[Dialect::PostgreSql, Dialect::Sqlite];
const MY_LITE: &[Dialect] = &[Dialect::MySql, Dialect::Sqlite];
const ALL: &[Dialect] = &[Dialect::PostgreSql, Dialect::MySql, Dialect::Sqlite];

/// Uppercase keyword → dialects reserving it.
const RESERVED_KEYWORDS: &[(&str, &[Dialect])] = &[
    ("A", PG),
    ("ABORT", PG_LITE),
    ("ABS", PG),
    ("ABSOLUTE", PG),
    ("ACCESS", PG),
    ("ACTION", ALL),
    ("ADA", PG),
    ("ADD", ALL),
    ("ADMIN", PG),
    ("AFTER", ALL),
    ("AGAINST", MY),
    ("AGGREGATE", PG_MY),
    ("ALGORITHM", MY),
    ("ALIAS", PG),
    ("ALL", ALL),
    ("ALLOCATE", PG),
    ("ALSO", PG),
    ("ALTER", ALL),
    ("ALWAYS", PG),
    ("ANALYSE", PG),
    ("ANALYZE", ALL),
    ("AND", ALL),
    ("ANY", PG_MY),
    ("ARE", PG),
    ("ARRAY", PG),
    ("AS", ALL),
    ("ASC", ALL),
    ("ASCII", MY),
    ("ASENSITIVE", PG_MY),
    ("ASSERTION", PG),
    ("ASSIGNMENT", PG),
    ("ASYMMETRIC", PG),
    ("AT", PG),
    ("ATOMIC", PG),
    ("ATTACH", LITE),
    ("ATTRIBUTE", PG),
    ("ATTRIBUTES", PG),
    ("AUTHORIZATION", PG),
    ("AUTOINCREMENT", LITE),
    ("AUTO_INCREMENT", MY),
    ("AVG", PG_MY),
    ("AVG_ROW_LENGTH", MY),
    ("BACKUP", MY),
    ("BACKWARD", PG),
    ("BDB", MY),
    ("BEFORE", ALL),
    ("BEGIN", ALL),
    ("BERKELEYDB", MY),
    ("BERNOULLI", PG),
    ("BETWEEN", ALL),
    ("BIGINT", PG_MY),
    ("BINARY", PG_MY),
    ("BINLOG", MY),
    ("BIT", PG_MY),
    ("BITVAR", PG),
    ("BIT_LENGTH", PG),
    ("BLOB", PG_MY),
    ("BLOCK", MY),
    ("BOOL", MY),
    ("BOOLEAN", PG_MY),
    ("BOTH", PG_MY),
    ("BREADTH", PG),
    ("BTREE", MY),
    ("BY", ALL),
    ("BYTE", MY),
    ("C", PG),
    ("CACHE", PG_MY),
    ("CALL", PG_MY),
    ("CALLED", PG),
    ("CARDINALITY", PG),
    ("CASCADE", ALL),
    ("CASCADED", PG_MY),
    ("CASE", ALL),
    ("CAST", PG_LITE),
    ("CATALOG", PG),
    ("CATALOG_NAME", PG),
    ("CEIL", PG),
    ("CEILING", PG),
    ("CHAIN", PG_MY),
    ("CHANGE", MY),
    ("CHANGED", MY),
    ("CHAR", PG_MY),
    ("CHARACTER", PG_MY),
    ("CHARACTERISTICS", PG),
    ("CHARACTERS", PG),
    ("CHARACTER_LENGTH", PG),
    ("CHARACTER_SET_CATALOG", PG),
    ("CHARACTER_SET_NAME", PG),
    ("CHARACTER_SET_SCHEMA", PG),
    ("CHARSET", MY),
    ("CHAR_LENGTH", PG),
    ("CHECK", ALL),
    ("CHECKED", PG),
    ("CHECKPOINT", PG),
    ("CHECKSUM", MY),
    ("CIPHER", MY),
    ("CLASS", PG),
    ("CLASS_ORIGIN", PG),
    ("CLIENT", MY),
    ("CLOB", PG),
    ("CLOSE", PG_MY),
    ("CLUSTER", PG),
    ("COALESCE", PG),
    ("COBOL", PG),
    ("CODE", MY),
    ("COLLATE", ALL),
    ("COLLATION", PG_MY),
    ("COLLATION_CATALOG", PG),
    ("COLLATION_NAME", PG),
    ("COLLATION_SCHEMA", PG),
    ("COLLECT", PG),
    ("COLUMN", ALL),
    ("COLUMNS", MY),
    ("COLUMN_NAME", PG),
    ("COMMAND_FUNCTION", PG),
    ("COMMAND_FUNCTION_CODE", PG),
    ("COMMENT", PG_MY),
    ("COMMIT", ALL),
    ("COMMITTED", PG_MY),
    ("COMPACT", MY),
    ("COMPLETION", PG),
    ("COMPRESSED", MY),
    ("CONCURRENT", MY),
    ("CONDITION", PG_MY),
    ("CONDITION_NUMBER", PG),
    ("CONFLICT", LITE),
    ("CONNECT", PG),
    ("CONNECTION", PG_MY),
    ("CONNECTION_NAME", PG),
    ("CONSISTENT", MY),
    ("CONSTRAINT", ALL),
    ("CONSTRAINTS", PG),
    ("CONSTRAINT_CATALOG", PG),
    ("CONSTRAINT_NAME", PG),
    ("CONSTRAINT_SCHEMA", PG),
    ("CONSTRUCTOR", PG),
    ("CONTAINS", PG_MY),
    ("CONTEXT", MY),
    ("CONTINUE", PG_MY),
    ("CONVERSION", PG),
    ("CONVERT", PG_MY),
    ("COPY", PG),
    ("CORR", PG),
    ("CORRESPONDING", PG),
    ("COUNT", PG),
    ("COVAR_POP", PG),
    ("COVAR_SAMP", PG),
    ("CPU", MY),
    ("CREATE", ALL),
    ("CREATEDB", PG),
    ("CREATEROLE", PG),
    ("CREATEUSER", PG),
    ("CROSS", ALL),
    ("CSV", PG),
    ("CUBE", PG_MY),
    ("CUME_DIST", PG),
    ("CURRENT", PG),
    ("CURRENT_DATE", ALL),
    ("CURRENT_DEFAULT_TRANSFORM_GROUP", PG),
    ("CURRENT_PATH", PG),
    ("CURRENT_ROLE", PG),
    ("CURRENT_TIME", ALL),
    ("CURRENT_TIMESTAMP", ALL),
    ("CURRENT_TRANSFORM_GROUP_FOR_TYPE", PG),
    ("CURRENT_USER", PG_MY),
    ("CURSOR", PG_MY),
    ("CURSOR_NAME", PG),
    ("CYCLE", PG),
    ("DATA", PG_MY),
    ("DATABASE", ALL),
    ("DATABASES", MY),
    ("DATE", PG_MY),
    ("DATETIME", MY),
    ("DATETIME_INTERVAL_CODE", PG),
    ("DATETIME_INTERVAL_PRECISION", PG),
    ("DAY", PG_MY),
    ("DAY_HOUR", MY),
    ("DAY_MICROSECOND", MY),
    ("DAY_MINUTE", MY),
    ("DAY_SECOND", MY),
    ("DEALLOCATE", PG_MY),
    ("DEC", PG_MY),
    ("DECIMAL", PG_MY),
    ("DECLARE", PG_MY),
    ("DEFAULT", ALL),
    ("DEFAULTS", PG),
    ("DEFERRABLE", PG_LITE),
    ("DEFERRED", PG_LITE),
    ("DEFINED", PG),
    ("DEFINER", PG_MY),
    ("DEGREE", PG),
    ("DELAYED", MY),
    ("DELAY_KEY_WRITE", MY),
    ("DELETE", ALL),
    ("DELIMITER", PG),
    ("DELIMITERS", PG),
    ("DENSE_RANK", PG),
    ("DEPTH", PG),
    ("DEREF", PG),
    ("DERIVED", PG),
    ("DESC", ALL),
    ("DESCRIBE", PG_MY),
    ("DESCRIPTOR", PG),
    ("DESTROY", PG),
    ("DESTRUCTOR", PG),
    ("DES_KEY_FILE", MY),
    ("DETACH", LITE),
    ("DETERMINISTIC", PG_MY),
    ("DIAGNOSTICS", PG),
    ("DICTIONARY", PG),
    ("DIRECTORY", MY),
    ("DISABLE", PG_MY),
    ("DISCARD", MY),
    ("DISCONNECT", PG),
    ("DISPATCH", PG),
    ("DISTINCT", ALL),
    ("DISTINCTROW", MY),
    ("DIV", MY),
    ("DO", PG_MY),
    ("DOMAIN", PG),
    ("DOUBLE", PG_MY),
    ("DROP", ALL),
    ("DUAL", MY),
    ("DUMPFILE", MY),
    ("DUPLICATE", MY),
    ("DYNAMIC", PG_MY),
    ("DYNAMIC_FUNCTION", PG),
    ("DYNAMIC_FUNCTION_CODE", PG),
    ("EACH", ALL),
    ("ELEMENT", PG),
    ("ELSE", ALL),
    ("ELSEIF", MY),
    ("ENABLE", PG_MY),
    ("ENCLOSED", MY),
    ("ENCODING", PG),
    ("ENCRYPTED", PG),
    ("END", ALL),
    ("END-EXEC", PG),
    ("ENGINE", MY),
    ("ENGINES", MY),
    ("ENUM", MY),
    ("EQUALS", PG),
    ("ERRORS", MY),
    ("ESCAPE", ALL),
    ("ESCAPED", MY),
    ("EVENTS", MY),
    ("EVERY", PG),
    ("EXCEPT", PG_LITE),
    ("EXCEPTION", PG),
    ("EXCLUDE", PG),
    ("EXCLUDING", PG),
    ("EXCLUSIVE", PG_LITE),
    ("EXEC", PG),
    ("EXECUTE", PG_MY),
    ("EXISTING", PG),
    ("EXISTS", ALL),
    ("EXIT", MY),
    ("EXP", PG),
    ("EXPANSION", MY),
    ("EXPLAIN", ALL),
    ("EXTENDED", MY),
    ("EXTERNAL", PG),
    ("EXTRACT", PG),
    ("FAIL", LITE),
    ("FALSE", PG_MY),
    ("FAST", MY),
    ("FAULTS", MY),
    ("FETCH", PG_MY),
    ("FIELDS", MY),
    ("FILE", MY),
    ("FILTER", PG),
    ("FINAL", PG),
    ("FIRST", PG_MY),
    ("FIXED", MY),
    ("FLOAT", PG_MY),
    ("FLOAT4", MY),
    ("FLOAT8", MY),
    ("FLOOR", PG),
    ("FLUSH", MY),
    ("FOLLOWING", PG),
    ("FOR", ALL),
    ("FORCE", PG_MY),
    ("FOREIGN", ALL),
    ("FORTRAN", PG),
    ("FORWARD", PG),
    ("FOUND", PG_MY),
    ("FRAC_SECOND", MY),
    ("FREE", PG),
    ("FREEZE", PG),
    ("FROM", ALL),
    ("FULL", ALL),
    ("FULLTEXT", MY),
    ("FUNCTION", PG_MY),
    ("FUSION", PG),
    ("G", PG),
    ("GENERAL", PG),
    ("GENERATED", PG),
    ("GEOMETRY", MY),
    ("GEOMETRYCOLLECTION", MY),
    ("GET", PG),
    ("GET_FORMAT", MY),
    ("GLOB", LITE),
    ("GLOBAL", PG_MY),
    ("GO", PG),
    ("GOTO", PG),
    ("GRANT", PG_MY),
    ("GRANTED", PG),
    ("GRANTS", MY),
    ("GREATEST", PG),
    ("GROUP", ALL),
    ("GROUPING", PG),
    ("HANDLER", PG_MY),
    ("HASH", MY),
    ("HAVING", ALL),
    ("HEADER", PG),
    ("HELP", MY),
    ("HIERARCHY", PG),
    ("HIGH_PRIORITY", MY),
    ("HOLD", PG),
    ("HOST", PG),
    ("HOSTS", MY),
    ("HOUR", PG_MY),
    ("HOUR_MICROSECOND", MY),
    ("HOUR_MINUTE", MY),
    ("HOUR_SECOND", MY),
    ("IDENTIFIED", MY),
    ("IDENTITY", PG),
    ("IF", MY_LITE),
    ("IGNORE", ALL),
    ("ILIKE", PG),
    ("IMMEDIATE", PG_LITE),
    ("IMMUTABLE", PG),
    ("IMPLEMENTATION", PG),
    ("IMPLICIT", PG),
    ("IMPORT", MY),
    ("IN", ALL),
    ("INCLUDING", PG),
    ("INCREMENT", PG),
    ("INDEX", ALL),
    ("INDEXED", LITE),
    ("INDEXES", MY),
    ("INDICATOR", PG),
    ("INFILE", MY),
    ("INFIX", PG),
    ("INHERIT", PG),
    ("INHERITS", PG),
    ("INITIALIZE", PG),
    ("INITIALLY", PG_LITE),
    ("INNER", ALL),
    ("INNOBASE", MY),
    ("INNODB", MY),
    ("INOUT", PG_MY),
    ("INPUT", PG),
    ("INSENSITIVE", PG_MY),
    ("INSERT", ALL),
    ("INSERT_METHOD", MY),
    ("INSTANCE", PG),
    ("INSTANTIABLE", PG),
    ("INSTEAD", PG_LITE),
    ("INT", PG_MY),
    ("INT1", MY),
    ("INT2", MY),
    ("INT3", MY),
    ("INT4", MY),
    ("INT8", MY),
    ("INTEGER", PG_MY),
    ("INTERSECT", PG_LITE),
    ("INTERSECTION", PG),
    ("INTERVAL", PG_MY),
    ("INTO", ALL),
    ("INVOKER", PG_MY),
    ("IO", MY),
    ("IO_THREAD", MY),
    ("IPC", MY),
    ("IS", ALL),
    ("ISNULL", PG_LITE),
    ("ISOLATION", PG_MY),
    ("ISSUER", MY),
    ("ITERATE", PG_MY),
    ("JOIN", ALL),
    ("K", PG),
    ("KEY", ALL),
    ("KEYS", MY),
    ("KEY_MEMBER", PG),
    ("KEY_TYPE", PG),
    ("KILL", MY),
    ("LANCOMPILER", PG),
    ("LANGUAGE", PG_MY),
    ("LARGE", PG),
    ("LAST", PG_MY),
    ("LATERAL", PG),
    ("LEADING", PG_MY),
    ("LEAST", PG),
    ("LEAVE", MY),
    ("LEAVES", MY),
    ("LEFT", ALL),
    ("LENGTH", PG),
    ("LESS", PG),
    ("LEVEL", PG_MY),
    ("LIKE", ALL),
    ("LIMIT", ALL),
    ("LINES", MY),
    ("LINESTRING", MY),
    ("LISTEN", PG),
    ("LN", PG),
    ("LOAD", PG_MY),
    ("LOCAL", PG_MY),
    ("LOCALTIME", PG_MY),
    ("LOCALTIMESTAMP", PG_MY),
    ("LOCATION", PG),
    ("LOCATOR", PG),
    ("LOCK", PG_MY),
    ("LOCKS", MY),
    ("LOGIN", PG),
    ("LOGS", MY),
    ("LONG", MY),
    ("LONGBLOB", MY),
    ("LONGTEXT", MY),
    ("LOOP", MY),
    ("LOWER", PG),
    ("LOW_PRIORITY", MY),
    ("M", PG),
    ("MAP", PG),
    ("MASTER", MY),
    ("MASTER_CONNECT_RETRY", MY),
    ("MASTER_HOST", MY),
    ("MASTER_LOG_FILE", MY),
    ("MASTER_LOG_POS", MY),
    ("MASTER_PASSWORD", MY),
    ("MASTER_PORT", MY),
    ("MASTER_SERVER_ID", MY),
    ("MASTER_SSL", MY),
    ("MASTER_SSL_CA", MY),
    ("MASTER_SSL_CAPATH", MY),
    ("MASTER_SSL_CERT", MY),
    ("MASTER_SSL_CIPHER", MY),
    ("MASTER_SSL_KEY", MY),
    ("MASTER_USER", MY),
    ("MATCH", ALL),
    ("MATCHED", PG),
    ("MAX", PG),
    ("MAXVALUE", PG),
    ("MAX_CONNECTIONS_PER_HOUR", MY),
    ("MAX_QUERIES_PER_HOUR", MY),
    ("MAX_ROWS", MY),
    ("MAX_UPDATES_PER_HOUR", MY),
    ("MAX_USER_CONNECTIONS", MY),
    ("MEDIUM", MY),
    ("MEDIUMBLOB", MY),
    ("MEDIUMINT", MY),
    ("MEDIUMTEXT", MY),
    ("MEMBER", PG),
    ("MEMORY", MY),
    ("MERGE", PG_MY),
    ("MESSAGE_LENGTH", PG),
    ("MESSAGE_OCTET_LENGTH", PG),
    ("MESSAGE_TEXT", PG),
    ("METHOD", PG),
    ("MICROSECOND", MY),
    ("MIDDLEINT", MY),
    ("MIGRATE", MY),
    ("MIN", PG),
    ("MINUTE", PG_MY),
    ("MINUTE_MICROSECOND", MY),
    ("MINUTE_SECOND", MY),
    ("MINVALUE", PG),
    ("MIN_ROWS", MY),
    ("MOD", PG_MY),
    ("MODE", PG_MY),
    ("MODIFIES", PG_MY),
    ("MODIFY", PG_MY),
    ("MODULE", PG),
    ("MONTH", PG_MY),
    ("MORE", PG),
    ("MOVE", PG),
    ("MULTILINESTRING", MY),
    ("MULTIPOINT", MY),
    ("MULTIPOLYGON", MY),
    ("MULTISET", PG),
    ("MUMPS", PG),
    ("MUTEX", MY),
    ("NAME", PG_MY),
    ("NAMES", PG_MY),
    ("NATIONAL", PG_MY),
    ("NATURAL", ALL),
    ("NCHAR", PG_MY),
    ("NCLOB", PG),
    ("NDB", MY),
    ("NDBCLUSTER", MY),
    ("NESTING", PG),
    ("NEW", PG_MY),
    ("NEXT", PG_MY),
    ("NO", ALL),
    ("NOCREATEDB", PG),
    ("NOCREATEROLE", PG),
    ("NOCREATEUSER", PG),
    ("NOINHERIT", PG),
    ("NOLOGIN", PG),
    ("NONE", PG_MY),
    ("NORMALIZE", PG),
    ("NORMALIZED", PG),
    ("NOSUPERUSER", PG),
    ("NOT", ALL),
    ("NOTHING", PG),
    ("NOTIFY", PG),
    ("NOTNULL", PG_LITE),
    ("NOWAIT", PG),
    ("NO_WRITE_TO_BINLOG", MY),
    ("NULL", ALL),
    ("NULLABLE", PG),
    ("NULLIF", PG),
    ("NULLS", PG),
    ("NUMBER", PG),
    ("NUMERIC", PG_MY),
    ("NVARCHAR", MY),
    ("OBJECT", PG),
    ("OCTETS", PG),
    ("OCTET_LENGTH", PG),
    ("OF", PG_LITE),
    ("OFF", PG),
    ("OFFSET", ALL),
    ("OIDS", PG),
    ("OLD", PG),
    ("OLD_PASSWORD", MY),
    ("ON", ALL),
    ("ONE", MY),
    ("ONE_SHOT", MY),
    ("ONLY", PG),
    ("OPEN", PG_MY),
    ("OPERATION", PG),
    ("OPERATOR", PG),
    ("OPTIMIZE", MY),
    ("OPTION", PG_MY),
    ("OPTIONALLY", MY),
    ("OPTIONS", PG),
    ("OR", ALL),
    ("ORDER", ALL),
    ("ORDERING", PG),
    ("ORDINALITY", PG),
    ("OTHERS", PG),
    ("OUT", PG_MY),
    ("OUTER", ALL),
    ("OUTFILE", MY),
    ("OUTPUT", PG),
    ("OVER", PG),
    ("OVERLAPS", PG),
    ("OVERLAY", PG),
    ("OVERRIDING", PG),
    ("OWNER", PG),
    ("PACK_KEYS", MY),
    ("PAD", PG),
    ("PAGE", MY),
    ("PARAMETER", PG),
    ("PARAMETERS", PG),
    ("PARAMETER_MODE", PG),
    ("PARAMETER_NAME", PG),
    ("PARAMETER_ORDINAL_POSITION", PG),
    ("PARAMETER_SPECIFIC_CATALOG", PG),
    ("PARAMETER_SPECIFIC_NAME", PG),
    ("PARAMETER_SPECIFIC_SCHEMA", PG),
    ("PARTIAL", PG_MY),
    ("PARTITION", PG),
    ("PASCAL", PG),
    ("PASSWORD", PG_MY),
    ("PATH", PG),
    ("PERCENTILE_CONT", PG),
    ("PERCENTILE_DISC", PG),
    ("PERCENT_RANK", PG),
    ("PHASE", MY),
    ("PLACING", PG),
    ("PLAN", LITE),
    ("PLI", PG),
    ("POINT", MY),
    ("POLYGON", MY),
    ("POSITION", PG),
    ("POSTFIX", PG),
    ("POWER", PG),
    ("PRAGMA", LITE),
    ("PRECEDING", PG),
    ("PRECISION", PG_MY),
    ("PREFIX", PG),
    ("PREORDER", PG),
    ("PREPARE", PG_MY),
    ("PREPARED", PG),
    ("PRESERVE", PG),
    ("PREV", MY),
    ("PRIMARY", ALL),
    ("PRIOR", PG),
    ("PRIVILEGES", PG_MY),
    ("PROCEDURAL", PG),
    ("PROCEDURE", PG_MY),
    ("PROCESSLIST", MY),
    ("PROFILE", MY),
    ("PROFILES", MY),
    ("PUBLIC", PG),
    ("PURGE", MY),
    ("QUARTER", MY),
    ("QUERY", MY_LITE),
    ("QUICK", MY),
    ("QUOTE", PG),
    ("RAID0", MY),
    ("RAID_CHUNKS", MY),
    ("RAID_CHUNKSIZE", MY),
    ("RAID_TYPE", MY),
    ("RAISE", LITE),
    ("RANGE", PG),
    ("RANK", PG),
    ("READ", PG_MY),
    ("READS", PG_MY),
    ("REAL", PG_MY),
    ("RECHECK", PG),
    ("RECOVER", MY),
    ("RECURSIVE", PG_LITE),
    ("REDUNDANT", MY),
    ("REF", PG),
    ("REFERENCES", ALL),
    ("REFERENCING", PG),
    ("REGEXP", MY_LITE),
    ("REGR_AVGX", PG),
    ("REGR_AVGY", PG),
    ("REGR_COUNT", PG),
    ("REGR_INTERCEPT", PG),
    ("REGR_R2", PG),
    ("REGR_SLOPE", PG),
    ("REGR_SXX", PG),
    ("REGR_SXY", PG),
    ("REGR_SYY", PG),
    ("REINDEX", PG_LITE),
    ("RELATIVE", PG),
    ("RELAY_LOG_FILE", MY),
    ("RELAY_LOG_POS", MY),
    ("RELAY_THREAD", MY),
    ("RELEASE", ALL),
    ("RELOAD", MY),
    ("RENAME", ALL),
    ("REPAIR", MY),
    ("REPEAT", MY),
    ("REPEATABLE", PG_MY),
    ("REPLACE", ALL),
    ("REPLICATION", MY),
    ("REQUIRE", MY),
    ("RESET", PG_MY),
    ("RESTART", PG),
    ("RESTORE", MY),
    ("RESTRICT", ALL),
    ("RESULT", PG),
    ("RESUME", MY),
    ("RETURN", PG_MY),
    ("RETURNED_CARDINALITY", PG),
    ("RETURNED_LENGTH", PG),
    ("RETURNED_OCTET_LENGTH", PG),
    ("RETURNED_SQLSTATE", PG),
    ("RETURNS", PG_MY),
    ("REVOKE", PG_MY),
    ("RIGHT", ALL),
    ("RLIKE", MY),
    ("ROLE", PG),
    ("ROLLBACK", ALL),
    ("ROLLUP", PG_MY),
    ("ROUTINE", PG_MY),
    ("ROUTINE_CATALOG", PG),
    ("ROUTINE_NAME", PG),
    ("ROUTINE_SCHEMA", PG),
    ("ROW", ALL),
    ("ROWS", PG_MY),
    ("ROW_COUNT", PG),
    ("ROW_FORMAT", MY),
    ("ROW_NUMBER", PG),
    ("RTREE", MY),
    ("RULE", PG),
    ("SAVEPOINT", ALL),
    ("SCALE", PG),
    ("SCHEMA", PG_MY),
    ("SCHEMAS", MY),
    ("SCHEMA_NAME", PG),
    ("SCOPE", PG),
    ("SCOPE_CATALOG", PG),
    ("SCOPE_NAME", PG),
    ("SCOPE_SCHEMA", PG),
    ("SCROLL", PG),
    ("SEARCH", PG),
    ("SECOND", PG_MY),
    ("SECOND_MICROSECOND", MY),
    ("SECTION", PG),
    ("SECURITY", PG_MY),
    ("SELECT", ALL),
    ("SELF", PG),
    ("SENSITIVE", PG_MY),
    ("SEPARATOR", MY),
    ("SEQUENCE", PG),
    ("SERIAL", MY),
    ("SERIALIZABLE", PG_MY),
    ("SERVER_NAME", PG),
    ("SESSION", PG_MY),
    ("SESSION_USER", PG),
    ("SET", ALL),
    ("SETOF", PG),
    ("SETS", PG),
    ("SHARE", PG_MY),
    ("SHOW", PG_MY),
    ("SHUTDOWN", MY),
    ("SIGNED", MY),
    ("SIMILAR", PG),
    ("SIMPLE", PG_MY),
    ("SIZE", PG),
    ("SLAVE", MY),
    ("SMALLINT", PG_MY),
    ("SNAPSHOT", MY),
    ("SOME", PG_MY),
    ("SONAME", MY),
    ("SOUNDS", MY),
    ("SOURCE", PG_MY),
    ("SPACE", PG),
    ("SPATIAL", MY),
    ("SPECIFIC", PG_MY),
    ("SPECIFICTYPE", PG),
    ("SPECIFIC_NAME", PG),
    ("SQL", PG_MY),
    ("SQLCODE", PG),
    ("SQLERROR", PG),
    ("SQLEXCEPTION", PG_MY),
    ("SQLSTATE", PG_MY),
    ("SQLWARNING", PG_MY),
    ("SQL_BIG_RESULT", MY),
    ("SQL_BUFFER_RESULT", MY),
    ("SQL_CACHE", MY),
    ("SQL_CALC_FOUND_ROWS", MY),
    ("SQL_NO_CACHE", MY),
    ("SQL_SMALL_RESULT", MY),
    ("SQL_THREAD", MY),
    ("SQL_TSI_DAY", MY),
    ("SQL_TSI_FRAC_SECOND", MY),
    ("SQL_TSI_HOUR", MY),
    ("SQL_TSI_MINUTE", MY),
    ("SQL_TSI_MONTH", MY),
    ("SQL_TSI_QUARTER", MY),
    ("SQL_TSI_SECOND", MY),
    ("SQL_TSI_WEEK", MY),
    ("SQL_TSI_YEAR", MY),
    ("SQRT", PG),
    ("SSL", MY),
    ("STABLE", PG),
    ("START", PG_MY),
    ("STARTING", MY),
    ("STATE", PG),
    ("STATEMENT", PG),
    ("STATIC", PG),
    ("STATISTICS", PG),
    ("STATUS", MY),
    ("STDDEV_POP", PG),
    ("STDDEV_SAMP", PG),
    ("STDIN", PG),
    ("STDOUT", PG),
    ("STOP", MY),
    ("STORAGE", PG_MY),
    ("STRAIGHT_JOIN", MY),
    ("STRICT", PG),
    ("STRING", MY),
    ("STRIPED", MY),
    ("STRUCTURE", PG),
    ("STYLE", PG),
    ("SUBCLASS_ORIGIN", PG),
    ("SUBJECT", MY),
    ("SUBLIST", PG),
    ("SUBMULTISET", PG),
    ("SUBSTRING", PG),
    ("SUM", PG),
    ("SUPER", MY),
    ("SUPERUSER", PG),
    ("SUSPEND", MY),
    ("SWAPS", MY),
    ("SWITCHES", MY),
    ("SYMMETRIC", PG),
    ("SYSID", PG),
    ("SYSTEM", PG),
    ("SYSTEM_USER", PG),
    ("TABLE", ALL),
    ("TABLES", MY),
    ("TABLESAMPLE", PG),
    ("TABLESPACE", PG_MY),
    ("TABLE_NAME", PG),
    ("TEMP", PG_LITE),
    ("TEMPLATE", PG),
    ("TEMPORARY", ALL),
    ("TEMPTABLE", MY),
    ("TERMINATE", PG),
    ("TERMINATED", MY),
    ("TEXT", MY),
    ("THAN", PG),
    ("THEN", ALL),
    ("TIES", PG),
    ("TIME", PG_MY),
    ("TIMESTAMP", PG_MY),
    ("TIMESTAMPADD", MY),
    ("TIMESTAMPDIFF", MY),
    ("TIMEZONE_HOUR", PG),
    ("TIMEZONE_MINUTE", PG),
    ("TINYBLOB", MY),
    ("TINYINT", MY),
    ("TINYTEXT", MY),
    ("TO", ALL),
    ("TOAST", PG),
    ("TOP_LEVEL_COUNT", PG),
    ("TRAILING", PG_MY),
    ("TRANSACTION", ALL),
    ("TRANSACTIONS_COMMITTED", PG),
    ("TRANSACTIONS_ROLLED_BACK", PG),
    ("TRANSACTION_ACTIVE", PG),
    ("TRANSFORM", PG),
    ("TRANSFORMS", PG),
    ("TRANSLATE", PG),
    ("TRANSLATION", PG),
    ("TREAT", PG),
    ("TRIGGER", ALL),
    ("TRIGGERS", MY),
    ("TRIGGER_CATALOG", PG),
    ("TRIGGER_NAME", PG),
    ("TRIGGER_SCHEMA", PG),
    ("TRIM", PG),
    ("TRUE", PG_MY),
    ("TRUNCATE", PG_MY),
    ("TRUSTED", PG),
    ("TYPE", PG_MY),
    ("TYPES", MY),
    ("UESCAPE", PG),
    ("UNBOUNDED", PG),
    ("UNCOMMITTED", PG_MY),
    ("UNDEFINED", MY),
    ("UNDER", PG),
    ("UNDO", MY),
    ("UNENCRYPTED", PG),
    ("UNICODE", MY),
    ("UNION", ALL),
    ("UNIQUE", ALL),
    ("UNKNOWN", PG_MY),
    ("UNLISTEN", PG),
    ("UNLOCK", MY),
    ("UNNAMED", PG),
    ("UNNEST", PG),
    ("UNSIGNED", MY),
    ("UNTIL", PG_MY),
    ("UPDATE", ALL),
    ("UPGRADE", MY),
    ("UPPER", PG),
    ("USAGE", PG_MY),
    ("USE", MY),
    ("USER", PG_MY),
    ("USER_DEFINED_TYPE_CATALOG", PG),
    ("USER_DEFINED_TYPE_CODE", PG),
    ("USER_DEFINED_TYPE_NAME", PG),
    ("USER_DEFINED_TYPE_SCHEMA", PG),
    ("USER_RESOURCES", MY),
    ("USE_FRM", MY),
    ("USING", ALL),
    ("UTC_DATE", MY),
    ("UTC_TIME", MY),
    ("UTC_TIMESTAMP", MY),
    ("VACUUM", PG_LITE),
    ("VALID", PG),
    ("VALIDATOR", PG),
    ("VALUE", PG_MY),
    ("VALUES", ALL),
    ("VARBINARY", MY),
    ("VARCHAR", PG_MY),
    ("VARCHARACTER", MY),
    ("VARIABLE", PG),
    ("VARIABLES", MY),
    ("VARYING", PG_MY),
    ("VAR_POP", PG),
    ("VAR_SAMP", PG),
    ("VERBOSE", PG),
    ("VIEW", ALL),
    ("VIRTUAL", LITE),
    ("VOLATILE", PG),
    ("WARNINGS", MY),
    ("WEEK", MY),
    ("WHEN", ALL),
    ("WHENEVER", PG),
    ("WHERE", ALL),
    ("WHILE", MY),
    ("WIDTH_BUCKET", PG),
    ("WINDOW", PG),
    ("WITH", ALL),
    ("WITHIN", PG),
    ("WITHOUT", PG_LITE),
    ("WORK", PG_MY),
    ("WRITE", PG_MY),
    ("X509", MY),
    ("XA", MY),
    ("XOR", MY),
    ("YEAR", PG_MY),
    ("YEAR_MONTH", MY),
    ("ZEROFILL", MY),
    ("ZONE", PG),
];

/// Process-wide index over [`RESERVED_KEYWORDS`].
fn registry() -> &'static HashMap<&'static str, &'static [Dialect]> {
    static REGISTRY: OnceLock<HashMap<&'static str, &'static [Dialect]>> = OnceLock::new();
    REGISTRY.get_or_init(|| RESERVED_KEYWORDS.iter().copied().collect())
}

/// Look up the dialects reserving `identifier`, ignoring case.
///
/// Returns `None` for identifiers no dialect reserves.
#[must_use]
pub fn lookup(identifier: &str) -> Option<&'static [Dialect]> {
    registry()
        .get(identifier.to_ascii_uppercase().as_str())
        .copied()
}

/// Whether any dialect reserves `identifier`.
#[must_use]
pub fn is_reserved(identifier: &str) -> bool {
    lookup(identifier).is_some()
}

/// Number of keywords in the registry.
#[must_use]
pub fn keyword_count() -> usize {
    registry().len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
